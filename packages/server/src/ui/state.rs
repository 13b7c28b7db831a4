//! Shared application state.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    domain::{LotteryRepository, MessagePusher, RelayPolicy, RoomRepository},
    usecase::{
        AdminInitUseCase, ConnectSessionUseCase, DisconnectSessionUseCase, GetLotteryUseCase,
        GetRoomDetailUseCase, GetRoomsUseCase, JoinRoomUseCase, MobileLoginUseCase,
        PerformDrawUseCase, PlayerJoinUseCase, ResetGameUseCase, ResetLotteryUseCase,
        StartRollingUseCase, ToggleExcludeUseCase, UpdateGameStatusUseCase,
    },
};

/// Shared application state
pub struct AppState {
    /// Held while one inbound event is handled, so that every mutation and
    /// its deliveries complete before the next event starts.
    pub dispatch_lock: Mutex<()>,
    /// ConnectSessionUseCase（セッション接続のユースケース）
    pub connect_session_usecase: Arc<ConnectSessionUseCase>,
    /// DisconnectSessionUseCase（セッション切断のユースケース）
    pub disconnect_session_usecase: Arc<DisconnectSessionUseCase>,
    /// JoinRoomUseCase（ルーム参加のユースケース）
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    /// PlayerJoinUseCase（プレイヤー参加のユースケース）
    pub player_join_usecase: Arc<PlayerJoinUseCase>,
    /// UpdateGameStatusUseCase（ゲーム状態更新のユースケース）
    pub update_game_status_usecase: Arc<UpdateGameStatusUseCase>,
    /// ResetGameUseCase（ルームリセットのユースケース）
    pub reset_game_usecase: Arc<ResetGameUseCase>,
    /// MobileLoginUseCase（抽選登録のユースケース）
    pub mobile_login_usecase: Arc<MobileLoginUseCase>,
    /// AdminInitUseCase（管理画面初期化のユースケース）
    pub admin_init_usecase: Arc<AdminInitUseCase>,
    /// StartRollingUseCase（抽選演出開始のユースケース）
    pub start_rolling_usecase: Arc<StartRollingUseCase>,
    /// PerformDrawUseCase（抽選実行のユースケース）
    pub perform_draw_usecase: Arc<PerformDrawUseCase>,
    /// ResetLotteryUseCase（抽選リセットのユースケース）
    pub reset_lottery_usecase: Arc<ResetLotteryUseCase>,
    /// ToggleExcludeUseCase（除外切り替えのユースケース）
    pub toggle_exclude_usecase: Arc<ToggleExcludeUseCase>,
    /// GetRoomsUseCase（ルーム一覧取得のユースケース）
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    /// GetRoomDetailUseCase（ルーム詳細取得のユースケース）
    pub get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
    /// GetLotteryUseCase（抽選状態取得のユースケース）
    pub get_lottery_usecase: Arc<GetLotteryUseCase>,
}

impl AppState {
    /// Wire every use case against the given stores and pusher.
    pub fn new(
        room_repository: Arc<dyn RoomRepository>,
        lottery_repository: Arc<dyn LotteryRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        policy: RelayPolicy,
    ) -> Self {
        Self {
            dispatch_lock: Mutex::new(()),
            connect_session_usecase: Arc::new(ConnectSessionUseCase::new(message_pusher.clone())),
            disconnect_session_usecase: Arc::new(DisconnectSessionUseCase::new(
                room_repository.clone(),
                message_pusher.clone(),
                policy,
            )),
            join_room_usecase: Arc::new(JoinRoomUseCase::new(
                room_repository.clone(),
                message_pusher.clone(),
            )),
            player_join_usecase: Arc::new(PlayerJoinUseCase::new(
                room_repository.clone(),
                message_pusher.clone(),
                policy,
            )),
            update_game_status_usecase: Arc::new(UpdateGameStatusUseCase::new(
                room_repository.clone(),
                message_pusher.clone(),
                policy,
            )),
            reset_game_usecase: Arc::new(ResetGameUseCase::new(
                room_repository.clone(),
                message_pusher.clone(),
            )),
            mobile_login_usecase: Arc::new(MobileLoginUseCase::new(
                lottery_repository.clone(),
                message_pusher.clone(),
            )),
            admin_init_usecase: Arc::new(AdminInitUseCase::new(
                lottery_repository.clone(),
                message_pusher.clone(),
            )),
            start_rolling_usecase: Arc::new(StartRollingUseCase::new(message_pusher.clone())),
            perform_draw_usecase: Arc::new(PerformDrawUseCase::new(
                lottery_repository.clone(),
                message_pusher.clone(),
            )),
            reset_lottery_usecase: Arc::new(ResetLotteryUseCase::new(
                lottery_repository.clone(),
                message_pusher,
            )),
            toggle_exclude_usecase: Arc::new(ToggleExcludeUseCase::new(
                lottery_repository.clone(),
            )),
            get_rooms_usecase: Arc::new(GetRoomsUseCase::new(room_repository.clone())),
            get_room_detail_usecase: Arc::new(GetRoomDetailUseCase::new(room_repository)),
            get_lottery_usecase: Arc::new(GetLotteryUseCase::new(lottery_repository)),
        }
    }
}
