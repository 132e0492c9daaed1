pub mod chat;
pub mod users;

pub use chat::{
    get_chat, get_chat_history, insert_chat, set_chat_response, HistoryOptions,
    DEFAULT_HISTORY_LIMIT,
};
pub use users::{find_by_credentials, insert_user, username_exists};
