//! Domain model (ids, markers, task, errors).

pub mod errors;
pub mod ids;
pub mod marker;
pub mod task;

pub use self::errors::{ErrorKind, ServiceError, StoreError};
pub use self::ids::{InvalidTaskId, TaskId};
pub use self::marker::{Color, Priority, UnknownMarker};
pub use self::task::{MAX_TITLE_LENGTH, Task};
