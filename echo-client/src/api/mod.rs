//! Typed wrappers for the backend's request/response endpoints.
//!
//! These are thin: each call maps one HTTP exchange to one typed result,
//! with no streaming and no client-side logic beyond the shared error
//! mapping. Endpoints live on [`EchoClient`](crate::EchoClient) as methods;
//! this module holds their request and response shapes.

mod agents;
mod memory;
mod profile;
mod tasks;

pub use agents::{Agent, AgentReport, AgentRunOutcome};
pub use memory::{Memory, MemoryMatch, NewMemory, SavedMemory};
pub use profile::{ProfileUpdateAck, TwinProfile};
pub use tasks::{NewTask, Task, TaskUpdate};
