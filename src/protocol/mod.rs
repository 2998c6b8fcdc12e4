//! Arbiter line protocol
//!
//! Inbound:
//! - `S <P>` start, `<P>` is `R` or `B`
//! - `R <b0>,<b1>,...` move request with the playable boards
//! - `P <P> <board> <tile>` tile placed
//! - `G <P|S> <board>` local board won, or stalemated
//!
//! Outbound:
//! - `M <board> <tile>` exactly once per `R`

pub mod channel;
pub mod command;
pub mod response;

pub use channel::ProtocolChannel;
pub use command::{parse_command, Command};
pub use response::Response;
