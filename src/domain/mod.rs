pub mod board;
pub mod container;
pub mod intent;
pub mod item;
pub mod reorder;
pub mod tier;

pub use board::{Board, Outcome, Rejection};
pub use container::{Container, BANK_ID};
pub use intent::{BoardIntent, Direction, MoveIntent};
pub use item::{ContentRef, Item, ItemId};
pub use tier::{Tier, TierColor, TierId};
