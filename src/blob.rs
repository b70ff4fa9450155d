use std::{
    collections::HashMap,
    fs::File,
    io::{Read, Seek, SeekFrom},
    path::Path,
};

use bytes::Bytes;

use crate::{
    error::{Error, Result},
    utils::{read_le_dword_at, read_le_word_at},
};

pub const BLOCK_SIZE: usize = 4096;

const SINGLE_BLOB_BLOCK: u8 = 0x02;
const SUBALLOCATED_BLOCK: u8 = 0x03;

const BLOCK_HEADER_SIZE: usize = 3;
const SINGLE_LENGTH_OFFSET: usize = 3;
const SINGLE_MODIFICATOR_OFFSET: usize = 7;
const SINGLE_DATA_OFFSET: usize = 9;
const SUBALLOCATED_TABLE_OFFSET: usize = 12;
const SUBALLOCATED_ENTRY_SIZE: usize = 5;
const SUBALLOCATED_SLOTS: usize = 64;
const SUBALLOCATED_UNIT: usize = 16;
const SINGLE_BLOB_INDEX: u8 = 0xFF;

/// Resolves an out-of-row descriptor into the bytes it points at.
pub trait BlobSource {
    fn read(&mut self, offset: u32, length: u32) -> Result<Bytes>;
}

impl<T: BlobSource + ?Sized> BlobSource for &mut T {
    fn read(&mut self, offset: u32, length: u32) -> Result<Bytes> {
        (**self).read(offset, length)
    }
}

/// A companion `.MB` file: 4 KiB blocks holding either one blob or up to
/// 64 small ones.
pub struct BlobFile<I: Read + Seek = File> {
    input: I,
    blocks: HashMap<u64, Bytes>,
}

impl BlobFile<File> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(BlobFile::new(File::open(path)?))
    }
}

impl<I: Read + Seek> BlobFile<I> {
    pub fn new(input: I) -> Self {
        Self {
            input,
            blocks: HashMap::new(),
        }
    }

    fn read_block(&mut self, block_offset: u64) -> Result<Bytes> {
        if let Some(block) = self.blocks.get(&block_offset) {
            return Ok(block.clone());
        }
        let block = self.load_block(block_offset)?;
        self.blocks.insert(block_offset, block.clone());
        Ok(block)
    }

    fn load_block(&mut self, block_offset: u64) -> Result<Bytes> {
        self.input.seek(SeekFrom::Start(block_offset))?;
        let mut header = [0; BLOCK_HEADER_SIZE];
        self.input.read_exact(&mut header)?;

        let mut buffer = header.to_vec();
        (&mut self.input)
            .take((BLOCK_SIZE - BLOCK_HEADER_SIZE) as u64)
            .read_to_end(&mut buffer)?;
        // Only a single blob spans more than one chunk; never read past the
        // end of the file whatever the header claims.
        if header[0] == SINGLE_BLOB_BLOCK {
            let chunks = u64::from(u16::from_le_bytes([header[1], header[2]]));
            let extra = chunks.saturating_sub(1) * BLOCK_SIZE as u64;
            (&mut self.input).take(extra).read_to_end(&mut buffer)?;
        }
        log::debug!(
            "loaded blob block at {block_offset:#x}: type {}, {} bytes",
            header[0],
            buffer.len()
        );
        Ok(Bytes::from(buffer))
    }
}

impl<I: Read + Seek> BlobSource for BlobFile<I> {
    fn read(&mut self, offset: u32, length: u32) -> Result<Bytes> {
        let block_offset = u64::from(offset & 0xFFFF_FF00);
        let index = (offset & 0xFF) as u8;
        let block = self.read_block(block_offset)?;
        let length = length as usize;
        let corrupt = |reason: String| Error::CorruptBlock {
            offset: block_offset,
            reason,
        };

        match block[0] {
            SINGLE_BLOB_BLOCK => {
                if index != SINGLE_BLOB_INDEX {
                    return Err(corrupt(format!("slot {index} in a single blob block")));
                }
                let stored = read_le_dword_at(&block, SINGLE_LENGTH_OFFSET)
                    .ok_or_else(|| corrupt("truncated header".to_string()))?
                    as usize;
                if let Some(modificator) = read_le_word_at(&block, SINGLE_MODIFICATOR_OFFSET) {
                    log::trace!("single blob at {block_offset:#x}, modification {modificator}");
                }
                if length > stored {
                    return Err(corrupt(format!("{length} bytes requested, {stored} stored")));
                }
                let end = SINGLE_DATA_OFFSET + length;
                if end > block.len() {
                    return Err(corrupt("blob runs past end of file".to_string()));
                }
                Ok(block.slice(SINGLE_DATA_OFFSET..end))
            }
            SUBALLOCATED_BLOCK => {
                let slot = usize::from(index);
                if slot >= SUBALLOCATED_SLOTS {
                    return Err(corrupt(format!("slot {slot} out of range")));
                }
                let entry = SUBALLOCATED_TABLE_OFFSET + slot * SUBALLOCATED_ENTRY_SIZE;
                let entry = block
                    .get(entry..entry + SUBALLOCATED_ENTRY_SIZE)
                    .ok_or_else(|| corrupt("truncated slot table".to_string()))?;
                let start = usize::from(entry[0]) * SUBALLOCATED_UNIT;
                let units = usize::from(entry[1]);
                if units == 0 {
                    return Err(corrupt(format!("slot {slot} is empty")));
                }
                if length > units * SUBALLOCATED_UNIT {
                    return Err(corrupt(format!(
                        "{length} bytes requested, slot {slot} holds {}",
                        units * SUBALLOCATED_UNIT
                    )));
                }
                let end = start + length;
                if end > block.len() {
                    return Err(corrupt("blob runs past end of file".to_string()));
                }
                Ok(block.slice(start..end))
            }
            other => Err(corrupt(format!("unexpected block type {other}"))),
        }
    }
}
