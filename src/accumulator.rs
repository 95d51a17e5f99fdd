/*!
Process-wide [`TigerString`](../struct.TigerString.html) for a single writer.

```
use tiger_string::accumulator;

# fn main() -> Result<(), tiger_string::Error> {
accumulator::init()?;
accumulator::append(b"hello")?;
accumulator::append(b" world")?;
accumulator::with_contents(|text| assert_eq!(text, b"hello world"))?;
# Ok(())
# }
```

The instance sits behind a lock, so nothing here may be called
from inside a [`with_contents()`](fn.with_contents.html) or [`with_current()`](fn.with_current.html) closure.
*/

use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::trace;

use crate::{Error, TigerString};

static CURRENT: Mutex<Option<TigerString>> = Mutex::new(None);

fn current() -> MutexGuard<'static, Option<TigerString>> {
	// append never leaves a half-written string behind, so whatever panicked left it usable
	CURRENT.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Installs a fresh, empty string, dropping whatever was accumulated before
pub fn init() -> Result<(), Error> {
	let fresh = TigerString::new()?;
	let old = current().replace(fresh);
	trace!(discarded = old.as_ref().map_or(0, |s| s.len()), "accumulator initialized");
	Ok(())
}

/// Appends `bytes` to the current string
pub fn append(bytes: &[u8]) -> Result<(), Error> {
	match current().as_mut() {
		Some(s) => s.append(bytes),
		None => Err(Error::NotInitialized),
	}
}

/// Runs `f` over accumulated contents without copying them
pub fn with_contents<F, T>(f: F) -> Result<T, Error>
where F: FnOnce(&[u8]) -> T
{
	with_current(|s| f(s.as_bytes()))
}

/// Runs `f` over the current string itself, e.g. to look at its capacity
pub fn with_current<F, T>(f: F) -> Result<T, Error>
where F: FnOnce(&TigerString) -> T
{
	current().as_ref()
		.map(f)
		.ok_or(Error::NotInitialized)
}

/// Removes the current string, leaving the accumulator uninitialized
pub fn take() -> Option<TigerString> {
	current().take()
}

#[cfg(test)]
mod tests {
	use super::*;

	// every test here shares the same process-wide string
	static SERIAL: Mutex<()> = Mutex::new(());

	fn serial() -> MutexGuard<'static, ()> {
		SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
	}

	fn len_and_capacity() -> (usize, usize) {
		with_current(|s| (s.len(), s.capacity())).unwrap()
	}

	#[test]
	fn uninitialized() {
		let _serial = serial();
		take();
		assert!(matches!(append(b"ab"), Err(Error::NotInitialized)));
		assert!(matches!(with_contents(|_| ()), Err(Error::NotInitialized)));
		assert!(matches!(with_current(|_| ()), Err(Error::NotInitialized)));
	}

	#[test]
	fn append_ab() {
		let _serial = serial();
		init().unwrap();
		append(&b"abc"[..2]).unwrap();
		with_contents(|text| assert_eq!(text, b"ab")).unwrap();
		assert_eq!(len_and_capacity(), (2, 32));
	}

	#[test]
	fn append_grows() {
		let _serial = serial();
		init().unwrap();
		append(&[b'x'; 40]).unwrap();
		assert_eq!(len_and_capacity(), (40, 60));
	}

	#[test]
	fn hello_world() {
		let _serial = serial();
		init().unwrap();
		append(b"hello").unwrap();
		append(b" world").unwrap();
		with_contents(|text| assert_eq!(text, b"hello world")).unwrap();
		assert_eq!(len_and_capacity(), (11, 32));
	}

	#[test]
	fn reinit_resets() {
		let _serial = serial();
		init().unwrap();
		append(&[b'y'; 100]).unwrap();
		init().unwrap();
		assert_eq!(len_and_capacity(), (0, 32));
		with_contents(|text| assert!(text.is_empty())).unwrap();
	}

	#[test]
	fn take_tears_down() {
		let _serial = serial();
		init().unwrap();
		append(b"mov r1, r2\n").unwrap();
		let s = take().unwrap();
		assert_eq!(s.as_bytes(), b"mov r1, r2\n");
		assert!(take().is_none());
		assert!(matches!(append(b"x"), Err(Error::NotInitialized)));
	}
}
