//! Session, vocabulary, badge rendering and settings shared by front ends.
//!
//! A [`Session`] owns everything one loaded catalog needs: the cards, the
//! detected game, the merged vocabulary and the display configuration. No
//! state lives in globals, so several sessions can coexist.

pub mod badges;
pub mod config;
pub mod error;
pub mod session;
pub mod settings;
pub mod vocabulary;

pub use badges::{BadgeRenderer, edition_badge, language_badge, quality_badge};
pub use config::{DisplayConfig, Theme};
pub use error::SessionError;
pub use session::{CollectionStats, DropdownOption, LoadTicket, Query, QueryResult, Session};
pub use settings::Settings;
pub use vocabulary::Vocabulary;
