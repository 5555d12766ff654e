use std::io::{self, ErrorKind, Read, Seek, SeekFrom};

use log::debug;

/// Occurrence count of every byte value plus the total number of bytes counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqTable {
    pub counts: [u64; 256],
    pub total: u64,
}

impl Default for FreqTable {
    fn default() -> Self {
        Self {
            counts: [0; 256],
            total: 0,
        }
    }
}

impl FreqTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the bytes in `data` to the counts.
    pub fn update(&mut self, data: &[u8]) {
        data.iter().for_each(|&el| self.counts[el as usize] += 1);
        self.total += data.len() as u64;
    }

    /// Count every byte of `source`, reading `block_size` bytes at a time, then seek the source
    /// back to where it started so it can be read again.
    pub fn from_reader<R: Read + Seek>(source: &mut R, block_size: usize) -> io::Result<Self> {
        let start = source.stream_position()?;
        let mut table = Self::new();
        let mut buf = vec![0_u8; block_size.max(1)];
        loop {
            match source.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => table.update(&buf[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        source.seek(SeekFrom::Start(start))?;
        debug!(
            "Counted {} bytes, {} distinct values",
            table.total,
            table.distinct()
        );
        Ok(table)
    }

    /// Number of byte values that occur at least once.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }
}

/// Returns a frequency count of the input data.
pub fn freqs(data: &[u8]) -> FreqTable {
    let mut table = FreqTable::new();
    table.update(data);
    table
}

#[cfg(test)]
mod test {
    use super::{freqs, FreqTable};
    use std::io::{Cursor, Read, Seek, SeekFrom};

    #[test]
    fn count_test() {
        let t = freqs(b"aaaabbbccd");
        assert_eq!(t.counts[b'a' as usize], 4);
        assert_eq!(t.counts[b'b' as usize], 3);
        assert_eq!(t.counts[b'c' as usize], 2);
        assert_eq!(t.counts[b'd' as usize], 1);
        assert_eq!(t.total, 10);
        assert_eq!(t.distinct(), 4);
    }

    #[test]
    fn reader_rewinds_test() {
        let data: Vec<u8> = (0..1000_u32).map(|i| (i % 7) as u8).collect();
        let mut src = Cursor::new(data.clone());
        // Small blocks to make sure counts accumulate over several reads.
        let t = FreqTable::from_reader(&mut src, 64).unwrap();
        assert_eq!(t, freqs(&data));
        assert_eq!(src.position(), 0);
        let mut again = vec![];
        src.read_to_end(&mut again).unwrap();
        assert_eq!(again, data);
    }

    #[test]
    fn reader_returns_to_start_position_test() {
        let mut src = Cursor::new(b"xxabc".to_vec());
        src.seek(SeekFrom::Start(2)).unwrap();
        let t = FreqTable::from_reader(&mut src, 8).unwrap();
        assert_eq!(t.total, 3);
        assert_eq!(t.counts[b'x' as usize], 0);
        assert_eq!(src.position(), 2);
    }

    #[test]
    fn empty_test() {
        let t = FreqTable::from_reader(&mut Cursor::new(Vec::<u8>::new()), 8).unwrap();
        assert_eq!(t.total, 0);
        assert_eq!(t.distinct(), 0);
    }
}
