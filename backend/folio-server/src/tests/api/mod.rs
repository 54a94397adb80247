mod error;
mod path_ids;
