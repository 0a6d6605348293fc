pub mod targa;
