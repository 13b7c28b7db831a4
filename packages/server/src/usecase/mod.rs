//! UseCase 層
//!
//! WebSocket のイベントと HTTP API の処理を、ドメイン層のインターフェース
//! （Repository / MessagePusher）だけを使って記述します。

pub mod admin_init;
pub mod connect_session;
pub mod disconnect_session;
pub mod error;
pub mod get_lottery;
pub mod get_room_detail;
pub mod get_rooms;
pub mod join_room;
pub mod mobile_login;
pub mod perform_draw;
pub mod player_join;
pub mod reset_game;
pub mod reset_lottery;
pub mod start_rolling;
pub mod toggle_exclude;
pub mod update_game_status;

#[cfg(test)]
pub(crate) mod test_support;

pub use admin_init::AdminInitUseCase;
pub use connect_session::ConnectSessionUseCase;
pub use disconnect_session::DisconnectSessionUseCase;
pub use error::{GetRoomDetailError, RelayError};
pub use get_lottery::GetLotteryUseCase;
pub use get_room_detail::GetRoomDetailUseCase;
pub use get_rooms::GetRoomsUseCase;
pub use join_room::JoinRoomUseCase;
pub use mobile_login::MobileLoginUseCase;
pub use perform_draw::PerformDrawUseCase;
pub use player_join::PlayerJoinUseCase;
pub use reset_game::ResetGameUseCase;
pub use reset_lottery::ResetLotteryUseCase;
pub use start_rolling::StartRollingUseCase;
pub use toggle_exclude::ToggleExcludeUseCase;
pub use update_game_status::UpdateGameStatusUseCase;
