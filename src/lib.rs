/*!
Growable byte accumulator for textual compiler output.

A [`TigerString`](struct.TigerString.html) starts with 32 bytes of storage
and only ever grows by appending at the end.
Whenever an append does not fit, storage is reallocated
to one and a half times the size required after the append,
which keeps repeated appends amortized O(1).

```
use tiger_string::TigerString;

# fn main() -> Result<(), tiger_string::Error> {
let mut s = TigerString::new()?;
s.append(b"hello")?;
s.append(b" world")?;
assert_eq!(s.as_bytes(), b"hello world");
assert_eq!(s.capacity(), 32);

s.append(&[b'x'; 40])?;
// floor((11 + 40) * 1.5)
assert_eq!(s.capacity(), 76);
# Ok(())
# }
```

For callers that would rather not carry a handle around,
the [`accumulator`](accumulator/index.html) module keeps one process-wide instance.
*/

use std::io;
use tracing::debug;

mod buffer;
pub use buffer::*;

mod error;
pub use error::Error;

pub mod accumulator;

/// Capacity of a freshly created [`TigerString`](struct.TigerString.html)
pub const DEFAULT_CAPACITY: usize = 32;

/// Capacity to grow to so that `required` bytes fit: `floor(required * 1.5)`
fn grown_capacity(required: usize) -> Option<usize> {
	required.checked_add(required / 2)
}

pub struct TigerString<B = VecBuffer> {
	buf: B,
}

pub struct TigerStringBuilder {
	capacity: usize,
}
impl TigerStringBuilder {
	pub fn new() -> Self {
		TigerStringBuilder {
			capacity: DEFAULT_CAPACITY,
		}
	}

	pub fn capacity(mut self, capacity: usize) -> Self {
		if capacity == 0 {
			panic!("non-positive buffer capacity requested")
		}
		self.capacity = capacity;
		self
	}

	pub fn build<B: Buffer>(self) -> Result<TigerString<B>, Error>
	where Error: From<B::Error>
	{
		let buf = B::new(self.capacity)?;
		debug!(capacity = buf.capacity(), "created tiger string");
		Ok(TigerString { buf })
	}
}
impl Default for TigerStringBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl TigerString {
	/// Empty string backed by [`VecBuffer`](struct.VecBuffer.html), with [`DEFAULT_CAPACITY`](constant.DEFAULT_CAPACITY.html)
	pub fn new() -> Result<Self, Error> {
		TigerStringBuilder::new()
			.build()
	}
}

impl<B: Buffer> TigerString<B>
where Error: From<B::Error>
{
	/**
	Appends `bytes` at the end, growing the storage first if they do not fit.

	On error nothing is appended and the string stays exactly as it was.
	*/
	pub fn append(&mut self, bytes: &[u8]) -> Result<(), Error> {
		let count = bytes.len();
		let len = self.buf.len();
		let required = len.checked_add(count)
			.ok_or(Error::CapacityOverflow)?;
		if required > self.buf.capacity() {
			let old = self.buf.capacity();
			let cap = grown_capacity(required)
				.ok_or(Error::CapacityOverflow)?;
			self.buf.enlarge(cap)?;
			debug!(old, new = cap, required, "grew tiger string");
		}
		self.buf.appendable()[ .. count ].copy_from_slice(bytes);
		self.buf.mark_appended(count);
		Ok(())
	}
}

impl<B: Buffer> TigerString<B> {
	/// Accumulated contents; the borrow ends before the next append
	pub fn as_bytes(&self) -> &[u8] {
		self.buf.filled()
	}
	pub fn len(&self) -> usize {
		self.buf.len()
	}
	pub fn is_empty(&self) -> bool {
		self.buf.len() == 0
	}
	pub fn capacity(&self) -> usize {
		self.buf.capacity()
	}
}

impl<B: Buffer> AsRef<[u8]> for TigerString<B> {
	fn as_ref(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl<B: Buffer> io::Write for TigerString<B>
where Error: From<B::Error>
{
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.append(buf)
			.map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		// nothing is cached on the way to the buffer
		Ok(())
	}
}
