pub mod cipher;
pub mod groups;
pub mod letter;

pub use cipher::Cipher;
pub use groups::{Alphabet, Group, PartitionError, Variant};
pub use letter::Letter;
