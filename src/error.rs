use std::collections::TryReserveError;

use quick_error::quick_error;

quick_error! {
	#[derive(Debug)]
	pub enum Error {
		/// Storage for a new or grown buffer could not be obtained
		Alloc(err: TryReserveError) {
			from()
			description("buffer allocation failed")
			display("failed to allocate buffer storage: {}", err)
			cause(err)
		}
		/// `len + count` (or its 1.5x growth target) does not fit into `usize`
		CapacityOverflow {
			description("buffer capacity overflow")
			display("requested buffer capacity does not fit into usize")
		}
		/// Accumulator was used before `accumulator::init()`
		NotInitialized {
			description("accumulator is not initialized")
			display("accumulator used before init()")
		}
	}
}
