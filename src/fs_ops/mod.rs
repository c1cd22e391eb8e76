//! Filesystem operations: modularized.
//! One small module per menu operation; each wraps one or two std::fs calls and
//! classifies failures into `FileManagerError`.

mod copy;
mod create;
mod file_move;
mod helpers;
mod list;
mod read;
mod remove;
mod sort;
mod util;

pub use copy::{copy_file, CopyReport, DEFAULT_CHUNK_SIZE};
pub use create::{create_file, GREETING};
pub use file_move::{move_file, MoveStrategy};
pub use helpers::describe_io_error;
pub use list::list_dir;
pub use read::read_file;
pub use remove::{delete_file, rename_file};
pub use sort::{collect_file_records, sort_by_size, sort_records, FileRecord, SortOrder};
