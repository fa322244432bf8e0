mod chat_view;
mod dashboard;
mod log_sidebar;

pub use chat_view::ChatView;
pub use dashboard::Dashboard;
pub use log_sidebar::LogSidebar;
