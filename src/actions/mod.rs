pub mod delete_path;
