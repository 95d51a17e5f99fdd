/**
This trait abstracts storage of a [`TigerString`](struct.TigerString.html) from its growth policy

The buffer keeps a contiguous region of exactly [`capacity()`](#tymethod.capacity) bytes,
of which the first [`len()`](#tymethod.len) bytes are [`filled()`](#tymethod.filled)
and the rest is [`appendable()`](#tymethod.appendable).

## Example usage

```
use tiger_string::{Buffer, VecBuffer};

# fn main() -> Result<(), std::collections::TryReserveError> {
let mut buf = VecBuffer::new(4)?;

// write data into free part of the buffer
buf.appendable()[..2].copy_from_slice(b"ab");
// append actually written bytes
buf.mark_appended(2);
assert_eq!(buf.filled(), b"ab");

// make room for more data, filled part stays where it is
buf.enlarge(16)?;
assert_eq!(buf.capacity(), 16);
assert_eq!(buf.appendable().len(), 14);
assert_eq!(buf.filled(), b"ab");
# Ok(())
# }
```
*/
pub trait Buffer
where Self: std::marker::Sized
{
	/// Error type emitted if failed to (re)allocate the buffer
	type Error;
	/// Allocate new buffer of exactly `cap` bytes.
	fn new(cap: usize) -> Result<Self, Self::Error>;
	/**
	Free tail of the region, right after [`filled()`](#tymethod.filled).

	Bytes written here only count once passed to [`mark_appended()`](#tymethod.mark_appended).
	*/
	fn appendable(&mut self) -> &mut [u8];
	/// Moves the end of [`filled()`](#tymethod.filled) forward by `amount` bytes;
	/// panics if that runs past [`capacity()`](#tymethod.capacity)
	fn mark_appended(&mut self, amount: usize);
	/**
	Reallocate the buffer so that it spans exactly `cap` bytes,
	carrying [`filled()`](#tymethod.filled) part over to the new region.

	Does nothing if the buffer is already at least that big.
	Leaves the buffer untouched on failure.
	*/
	fn enlarge(&mut self, cap: usize) -> Result<(), Self::Error>;
	/// Return filled part of the buffer
	fn filled(&self) -> &[u8];
	/// Number of bytes appended so far, i.e. where the next append lands
	fn len(&self) -> usize;
	/// Overall size of the buffer, filled and appendable parts combined
	fn capacity(&self) -> usize;
}

mod vec;
pub use vec::*;
