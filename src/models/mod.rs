pub mod characters;
pub mod ninja;
pub mod options;
pub mod seasons;

pub use characters::{Character, Item, ItemProperty, ItemSocket, Items, PassiveSkills};
pub use ninja::{HistoryPoint, ItemCollection, ItemLine, Language, Modifier, Sparkline};
pub use options::{
    ItemType, LanguageCode, PlayerHistoryOptions, QueryOptions, Realm, RealmOptions,
    SeasonOptions,
};
pub use seasons::{Challenges, LadderAccount, LadderCharacter, LadderEntry, PlayerHistory, Season};
