pub mod clients;
pub mod view;

pub use clients::ApiClient;
pub use view::TerminalView;
