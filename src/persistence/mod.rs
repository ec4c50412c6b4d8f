pub mod files;
pub mod store;

pub use files::{
    atomic_write, ensure_studi_dir, get_studi_dir, history_file, init_local_studi, read_file,
};
pub use store::HistoryStore;
