pub mod axes;
