pub mod error;
pub mod greeter;
pub mod io;
pub mod lang;
