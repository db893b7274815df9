mod int96;

pub use int96::Int96;
