pub mod bit_array;
