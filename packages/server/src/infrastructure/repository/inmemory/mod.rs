//! インメモリ Repository 実装
//!
//! プロセスのメモリ上にのみ状態を保持します。再起動すると全て失われます。

pub mod lottery;
pub mod room;

pub use lottery::InMemoryLotteryRepository;
pub use room::InMemoryRoomRepository;
