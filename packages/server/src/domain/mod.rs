//! ドメイン層
//!
//! ルーム・参加者・抽選のモデルと、それらを扱うためのインターフェース
//! （Repository / MessagePusher）を定義します。

pub mod entity;
pub mod error;
pub mod event;
pub mod lottery;
pub mod message_pusher;
pub mod policy;
pub mod repository;
pub mod value_object;

pub use entity::{GameState, Participant, Room};
pub use error::{LotteryError, MessagePushError, RepositoryError, ValueObjectError};
pub use event::OutboundEvent;
pub use lottery::{Lottery, User};
pub use message_pusher::{MessagePusher, PusherChannel};
pub use policy::RelayPolicy;
pub use repository::{LotteryRepository, RoomRepository};
pub use value_object::{
    ParticipantId, Payload, PlayerName, RoomId, SessionId, SessionIdFactory, Timestamp,
};
