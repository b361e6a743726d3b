//! Small building blocks shared by the service layer.

pub mod lock;
pub mod timeout;
