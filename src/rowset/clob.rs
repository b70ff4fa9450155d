use std::io::Read;

use bytes::{Buf, Bytes};

use crate::{
    blob::BlobSource,
    error::{Error, Result},
    utils::{read_le_dword_at, read_le_word_at},
};

const POINTER_SIZE: usize = 10;

/// Out-of-row pointer stored in a memo or blob field. The leading bytes
/// of the field (the leader) repeat the start of the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClobDescriptor {
    pub leader: Option<Bytes>,
    pub offset: u32,
    pub length: u32,
    pub modificator: u16,
}

impl ClobDescriptor {
    pub fn parse(field: &[u8]) -> Result<Self> {
        if field.len() < POINTER_SIZE {
            return Err(Error::InvalidDescriptor);
        }
        let pointer = field.len() - POINTER_SIZE;
        let leader = (pointer > 0).then(|| Bytes::copy_from_slice(&field[..pointer]));
        let offset = read_le_dword_at(field, pointer).ok_or(Error::InvalidDescriptor)?;
        let length = read_le_dword_at(field, pointer + 4).ok_or(Error::InvalidDescriptor)?;
        let modificator = read_le_word_at(field, pointer + 8).ok_or(Error::InvalidDescriptor)?;
        Ok(ClobDescriptor {
            leader,
            offset,
            length,
            modificator,
        })
    }
}

/// Character large object of a Paradox memo field, loaded on first use.
pub struct ParadoxClob<S: BlobSource> {
    value: Option<Bytes>,
    offset: u32,
    length: u32,
    source: Option<S>,
}

impl<S: BlobSource> ParadoxClob<S> {
    /// `source` is only consulted when the value is not held in the leader;
    /// a value stored out of row with no source fails on first use.
    pub fn new(descriptor: ClobDescriptor, source: Option<S>) -> Self {
        // Offset zero means the leader holds the whole value.
        if descriptor.offset == 0 {
            let value = descriptor.leader.map(|mut leader| {
                leader.truncate(descriptor.length as usize);
                leader
            });
            return ParadoxClob {
                value: Some(value.unwrap_or_default()),
                offset: 0,
                length: descriptor.length,
                source: None,
            };
        }
        ParadoxClob {
            value: None,
            offset: descriptor.offset,
            length: descriptor.length,
            source,
        }
    }

    pub fn length(&mut self) -> Result<u64> {
        Ok(self.load()?.len() as u64)
    }

    /// `pos` is 1-based.
    pub fn sub_bytes(&mut self, pos: u64, length: u64) -> Result<Bytes> {
        let value = self.load()?;
        let range = checked_range(value.len() as u64, pos, length)?;
        Ok(value.slice(range))
    }

    pub fn sub_string(&mut self, pos: u64, length: u64) -> Result<String> {
        let bytes = self.sub_bytes(pos, length)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn character_stream(&mut self) -> Result<impl Read> {
        Ok(self.load()?.reader())
    }

    pub fn character_stream_range(&mut self, pos: u64, length: u64) -> Result<impl Read> {
        if length == 0 {
            return Err(Error::InvalidLength(length));
        }
        Ok(self.sub_bytes(pos, length)?.reader())
    }

    pub fn truncate(&mut self, length: u64) -> Result<()> {
        let value = self.load()?;
        if length > value.len() as u64 {
            return Err(Error::InvalidLength(length));
        }
        let mut value = value;
        value.truncate(length as usize);
        self.value = Some(value);
        Ok(())
    }

    pub fn free(&mut self) {
        self.value = None;
        self.source = None;
    }

    fn load(&mut self) -> Result<Bytes> {
        if let Some(value) = &self.value {
            return Ok(value.clone());
        }
        let source = self.source.as_mut().ok_or(Error::InvalidDescriptor)?;
        let value = source
            .read(self.offset, self.length)
            .map_err(|e| Error::LoadData(Box::new(e)))?;
        self.value = Some(value.clone());
        Ok(value)
    }
}

fn checked_range(total: u64, pos: u64, length: u64) -> Result<std::ops::Range<usize>> {
    if pos < 1 || pos > total {
        return Err(Error::InvalidPosition(pos));
    }
    let start = pos - 1;
    let end = start
        .checked_add(length)
        .filter(|end| *end <= total)
        .ok_or(Error::InvalidSubstringLength)?;
    Ok(start as usize..end as usize)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::blob::{
        tests::{sample_file, SINGLE_OFFSET, SUBALLOCATED_OFFSET},
        BlobFile,
    };

    fn field(leader: &[u8], offset: u32, length: u32) -> Vec<u8> {
        let mut field = leader.to_vec();
        field.extend(offset.to_le_bytes());
        field.extend(length.to_le_bytes());
        field.extend(3u16.to_le_bytes());
        field
    }

    type MemoryFile = BlobFile<Cursor<Vec<u8>>>;

    fn empty_file() -> Option<MemoryFile> {
        Some(BlobFile::new(Cursor::new(Vec::new())))
    }

    #[test]
    fn parses_descriptor() {
        let descriptor = ClobDescriptor::parse(&field(b"abc", 0x1FF, 42)).unwrap();
        assert_eq!(descriptor.leader.as_deref(), Some(&b"abc"[..]));
        assert_eq!(descriptor.offset, 0x1FF);
        assert_eq!(descriptor.length, 42);
        assert_eq!(descriptor.modificator, 3);

        let bare = ClobDescriptor::parse(&field(b"", 0, 0)).unwrap();
        assert_eq!(bare.leader, None);
        assert!(matches!(
            ClobDescriptor::parse(&[0; 9]),
            Err(Error::InvalidDescriptor)
        ));
    }

    #[test]
    fn value_in_leader() {
        let descriptor = ClobDescriptor::parse(&field(b"short\0\0\0", 0, 5)).unwrap();
        let mut clob = ParadoxClob::new(descriptor, empty_file());
        assert_eq!(clob.length().unwrap(), 5);
        assert_eq!(clob.sub_string(1, 5).unwrap(), "short");
        assert_eq!(clob.sub_string(2, 3).unwrap(), "hor");
    }

    #[test]
    fn empty_leader() {
        let descriptor = ClobDescriptor::parse(&field(b"", 0, 0)).unwrap();
        let mut clob = ParadoxClob::new(descriptor, empty_file());
        assert_eq!(clob.length().unwrap(), 0);
        assert!(matches!(clob.sub_string(1, 0), Err(Error::InvalidPosition(1))));
    }

    #[test]
    fn value_in_blob_file() {
        let text = b"a memo that does not fit in the leader";
        let data = sample_file(text, &[]);
        let descriptor =
            ClobDescriptor::parse(&field(b"a memo", SINGLE_OFFSET, text.len() as u32)).unwrap();
        let mut clob = ParadoxClob::new(descriptor, Some(BlobFile::new(Cursor::new(data))));
        assert_eq!(clob.length().unwrap(), text.len() as u64);

        let mut read = String::new();
        clob.character_stream().unwrap().read_to_string(&mut read).unwrap();
        assert_eq!(read.as_bytes(), text);

        let mut part = String::new();
        clob.character_stream_range(3, 4)
            .unwrap()
            .read_to_string(&mut part)
            .unwrap();
        assert_eq!(part, "memo");
    }

    #[test]
    fn borrowed_source() {
        let mut file = BlobFile::new(Cursor::new(sample_file(b"", &[b"tiny"])));
        let descriptor = ClobDescriptor::parse(&field(b"", SUBALLOCATED_OFFSET, 4)).unwrap();
        let mut clob = ParadoxClob::new(descriptor, Some(&mut file));
        assert_eq!(clob.sub_string(1, 4).unwrap(), "tiny");
    }

    #[test]
    fn position_checks() {
        let descriptor = ClobDescriptor::parse(&field(b"abcdef", 0, 6)).unwrap();
        let mut clob = ParadoxClob::new(descriptor, empty_file());
        assert!(matches!(clob.sub_string(0, 1), Err(Error::InvalidPosition(0))));
        assert!(matches!(clob.sub_string(7, 1), Err(Error::InvalidPosition(7))));
        assert!(matches!(clob.sub_string(4, 4), Err(Error::InvalidSubstringLength)));
        assert!(matches!(
            clob.sub_string(2, u64::MAX),
            Err(Error::InvalidSubstringLength)
        ));
        assert!(matches!(
            clob.character_stream_range(1, u64::MAX),
            Err(Error::InvalidSubstringLength)
        ));
        assert!(matches!(
            clob.character_stream_range(1, 0),
            Err(Error::InvalidLength(0))
        ));
        assert_eq!(clob.sub_string(4, 3).unwrap(), "def");
    }

    #[test]
    fn truncate() {
        let descriptor = ClobDescriptor::parse(&field(b"abcdef", 0, 6)).unwrap();
        let mut clob = ParadoxClob::new(descriptor, empty_file());
        assert!(matches!(clob.truncate(7), Err(Error::InvalidLength(7))));
        clob.truncate(2).unwrap();
        assert_eq!(clob.length().unwrap(), 2);
        assert_eq!(clob.sub_string(1, 2).unwrap(), "ab");
    }

    #[test]
    fn free_invalidates() {
        let descriptor = ClobDescriptor::parse(&field(b"abc", 0, 3)).unwrap();
        let mut clob = ParadoxClob::new(descriptor, empty_file());
        clob.free();
        assert!(matches!(clob.length(), Err(Error::InvalidDescriptor)));
    }

    #[test]
    fn leader_needs_no_source() {
        let descriptor = ClobDescriptor::parse(&field(b"abc", 0, 3)).unwrap();
        let mut clob = ParadoxClob::<MemoryFile>::new(descriptor, None);
        assert_eq!(clob.sub_string(1, 3).unwrap(), "abc");
    }

    #[test]
    fn out_of_row_without_source() {
        let descriptor = ClobDescriptor::parse(&field(b"", SINGLE_OFFSET, 3)).unwrap();
        let mut clob = ParadoxClob::<MemoryFile>::new(descriptor, None);
        assert!(matches!(clob.length(), Err(Error::InvalidDescriptor)));
    }

    #[test]
    fn load_failure_is_wrapped() {
        let descriptor = ClobDescriptor::parse(&field(b"", SINGLE_OFFSET, 3)).unwrap();
        let mut clob = ParadoxClob::new(descriptor, empty_file());
        let err = clob.length().unwrap_err();
        assert!(matches!(err, Error::LoadData(ref inner) if matches!(**inner, Error::Io(_))));
    }
}
