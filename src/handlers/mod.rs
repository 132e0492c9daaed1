// Handlers module

pub mod chat;
pub mod history;
pub mod login;
pub mod signup;

pub use chat::{chat, chat_handler};
pub use history::{history, history_handler};
pub use login::{login, login_handler};
pub use signup::{signup, signup_handler};
