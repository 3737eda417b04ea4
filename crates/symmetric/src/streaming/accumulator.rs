//! Block accounting for one `update` call
//!
//! Pure bookkeeping: given how many bytes are pending and how many arrive,
//! decide which bytes go to the transform now and which are carried over.
//! No cryptographic work happens here.

/// How one `update` call splits its input
///
/// The input is consumed front to back as `fill` bytes into the pending
/// buffer, `bulk` bytes transformed straight from the input, and `tail`
/// bytes carried into the pending buffer for the next call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    /// Bytes moved from the input into the pending buffer first
    pub fill: usize,
    /// Whether the topped-up pending block is transformed in this call
    pub flush_pending: bool,
    /// Whole-block bytes transformed directly from the input
    pub bulk: usize,
    /// Bytes left over, carried in the pending buffer
    pub tail: usize,
}

impl Plan {
    /// Bytes written to the output by this call
    pub fn output_len(&self, block_size: usize) -> usize {
        if self.flush_pending {
            block_size + self.bulk
        } else {
            self.bulk
        }
    }

    /// Pending length once the call completes
    pub fn pending_after(&self, pending: usize) -> usize {
        if self.flush_pending {
            self.tail
        } else {
            pending + self.fill + self.tail
        }
    }
}

/// Plan an `update` over `input` bytes with `pending` bytes already buffered
///
/// With `hold_last` set (decrypting with padding), a whole block that ends
/// the input is never transformed: it stays pending so the final call can
/// check and strip its padding. Whether more input follows is judged from
/// this call's input only.
pub fn plan(pending: usize, input: usize, block_size: usize, hold_last: bool) -> Plan {
    debug_assert!(block_size > 0 && pending <= block_size);

    // Only top up a block that has already been started
    let fill = if pending > 0 {
        (block_size - pending).min(input)
    } else {
        0
    };
    let rest = input - fill;

    let pending_full = pending > 0 && pending + fill == block_size;
    let flush_pending = pending_full && (!hold_last || rest > 0);

    let mut bulk = rest - rest % block_size;
    if hold_last && bulk > 0 && bulk == rest {
        bulk -= block_size;
    }

    let plan = Plan {
        fill,
        flush_pending,
        bulk,
        tail: rest - bulk,
    };
    debug_assert!(plan.pending_after(pending) <= block_size);
    plan
}
