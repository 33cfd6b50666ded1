mod session;

pub use session::OrderSession;
