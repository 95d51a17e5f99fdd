use std::collections::TryReserveError;

pub struct VecBuffer {
	/*
	`buf.len()` is our capacity: the whole region is kept initialized (zeroed on growth),
	so that `appendable()` can hand out `&mut [u8]` without `unsafe`.
	`Vec::capacity()` itself might be bigger than what we asked for, we never look at it.
	*/
	buf: Vec<u8>,
	// end of filled part within the `buf`
	end: usize,
}
impl super::Buffer for VecBuffer {
	type Error = TryReserveError;
	fn new(size: usize) -> Result<Self, TryReserveError> {
		let mut buf = Vec::new();
		buf.try_reserve_exact(size)?;
		buf.resize(size, 0);
		Ok(VecBuffer {
			buf,
			end: 0,
		})
	}
	fn enlarge(&mut self, cap: usize) -> Result<(), TryReserveError> {
		let old = self.buf.len();
		if cap <= old {
			// there's plenty of room in the buffer,
			// nothing to do here
			return Ok(());
		}
		// Vec moves filled part into the new region and frees the old one
		self.buf.try_reserve_exact(cap - old)?;
		self.buf.resize(cap, 0);
		Ok(())
	}
	fn len(&self) -> usize {
		self.end
	}
	fn capacity(&self) -> usize {
		self.buf.len()
	}
	fn filled(&self) -> &[u8] {
		&self.buf[ .. self.end ]
	}
	fn appendable(&mut self) -> &mut [u8] {
		&mut self.buf[ self.end .. ]
	}
	fn mark_appended(&mut self, amount: usize) {
		assert!(amount <= self.buf.len() - self.end, "appended past the end of the buffer");
		self.end += amount;
	}
}
