/// Number of bytes one record occupies on disk.
pub const RECORD_BYTES: usize = 32;

const PRIMARY_BIT: u8 = 0x01;
const MODE_SHIFT: u8 = 1;
const MODE_MASK: u8 = 0x07;

/// One fixed-width stat entry keyed by `id`.
///
/// `primary` (1 bit) and `mode` (3 bits) share a packed flags byte; the
/// accessors keep them inside their bit ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatRecord {
    pub id: u64,
    pub count: i32,
    pub cost: f64,
    flags: u8,
}

impl StatRecord {
    pub fn new(id: u64, count: i32, cost: f64, primary: bool, mode: u8) -> Self {
        let mut record = StatRecord {
            id,
            count,
            cost,
            flags: 0,
        };
        record.set_primary(primary);
        record.set_mode(mode);
        record
    }

    pub fn primary(&self) -> bool {
        self.flags & PRIMARY_BIT != 0
    }

    pub fn set_primary(&mut self, primary: bool) {
        if primary {
            self.flags |= PRIMARY_BIT;
        } else {
            self.flags &= !PRIMARY_BIT;
        }
    }

    pub fn mode(&self) -> u8 {
        (self.flags >> MODE_SHIFT) & MODE_MASK
    }

    pub fn set_mode(&mut self, mode: u8) {
        self.flags &= !(MODE_MASK << MODE_SHIFT);
        self.flags |= (mode & MODE_MASK) << MODE_SHIFT;
    }

    /// Wire layout, little-endian:
    /// bytes 0..8 id, 8..12 count, 16..24 cost, 24 flags.
    /// Bytes 12..16 and 25..32 are alignment padding, written as zero.
    pub fn to_bytes(&self) -> [u8; RECORD_BYTES] {
        let mut buffer: [u8; RECORD_BYTES] = [0; RECORD_BYTES];
        buffer[0..8].copy_from_slice(&self.id.to_le_bytes());
        buffer[8..12].copy_from_slice(&self.count.to_le_bytes());
        buffer[16..24].copy_from_slice(&self.cost.to_le_bytes());
        buffer[24] = self.flags;
        buffer
    }

    /// Padding bytes and unused flag bits are ignored, matching the
    /// pass-through behaviour of the dump format (no field validation).
    pub fn from_bytes(buffer: &[u8; RECORD_BYTES]) -> Self {
        let id = u64::from_le_bytes(buffer[0..8].try_into().unwrap());
        let count = i32::from_le_bytes(buffer[8..12].try_into().unwrap());
        let cost = f64::from_le_bytes(buffer[16..24].try_into().unwrap());
        let flags = buffer[24] & (PRIMARY_BIT | (MODE_MASK << MODE_SHIFT));
        StatRecord {
            id,
            count,
            cost,
            flags,
        }
    }
}
