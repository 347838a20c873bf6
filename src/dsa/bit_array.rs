use std::io::{Read,Write};

use log::trace;

use crate::error::Result;

//bit i lives in bytes[i/8] at weight 1<<(i%8)
//capacity is always bytes.len()*8, nothing else is stored
#[derive(Debug,Clone,Default,PartialEq,Eq)]
pub struct BitArray {
    bytes:Vec<u8>
}

impl BitArray {
    /// Empty array with zero capacity. Storage is only allocated by [`BitArray::set`].
    pub fn new() -> Self {
        Self {bytes:vec![]}
    }

    /// Pre-allocates enough zeroed bytes for `bits` bits.
    ///
    /// Capacity is rounded up to the next whole byte, so callers may only
    /// rely on `capacity() >= bits`.
    pub fn with_capacity(bits:usize) -> Self {
        Self {bytes:vec![0;bits.div_ceil(8)]}
    }

    /// Number of addressable bits, always a multiple of 8.
    pub fn capacity(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Bits beyond capacity are implicitly unset.
    pub fn is_set(&self,index:usize) -> bool {
        let byte_pos = index / 8;
        let pos_in_byte = index % 8;
        match self.bytes.get(byte_pos) {
            Some(byte) => *byte & (1u8 << pos_in_byte) != 0,
            None => false
        }
    }

    /// Sets bit `index`, growing storage in whole bytes if it is out of range.
    pub fn set(&mut self,index:usize) {
        self.ensure_capacity(index);
        self.bytes[index / 8] |= 1u8 << (index % 8);
    }

    /// Clears bit `index`. Out of range is a no-op and never grows storage.
    pub fn unset(&mut self,index:usize) {
        if let Some(byte) = self.bytes.get_mut(index / 8) {
            *byte &= !(1u8 << (index % 8));
        }
    }

    //only the write path grows, reads and clears treat missing bytes as zero
    fn ensure_capacity(&mut self,bit_index:usize) {
        let needed = bit_index / 8 + 1;
        if needed > self.bytes.len() {
            trace!("growing bit array from {} to {} bytes for bit {bit_index}",self.bytes.len(),needed);
            self.bytes.resize(needed,0);
        }
        debug_assert!(self.capacity() > bit_index);
    }

    /// Packed copy of the storage. Its length is the authoritative capacity.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Replaces storage wholesale with `bytes`. Prior bits are discarded and
    /// capacity becomes `8 * bytes.len()`, even if that is smaller than before.
    pub fn from_bytes(&mut self,bytes:&[u8]) {
        trace!("replacing bit array storage: {} -> {} bytes",self.bytes.len(),bytes.len());
        self.bytes.clear();
        self.bytes.extend_from_slice(bytes);
    }

    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|byte| byte.count_ones() as usize).sum()
    }

    /// Indices of set bits in ascending order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bytes.iter().enumerate().flat_map(|(byte_pos,byte)| {
            (0..8).filter(move |pos_in_byte| byte & (1u8 << pos_in_byte) != 0)
                .map(move |pos_in_byte| byte_pos * 8 + pos_in_byte)
        })
    }

    /// Writes the packed layout as-is. No length prefix is added.
    pub fn write_to<W:Write>(&self,writer:&mut W) -> Result<()> {
        writer.write_all(&self.bytes)?;
        Ok(())
    }

    /// Reads exactly `len` bytes and loads them like [`BitArray::from_bytes`].
    /// On failure the array is left untouched.
    pub fn read_from<R:Read>(&mut self,reader:&mut R,len:usize) -> Result<()> {
        let mut buf = vec![0u8;len];
        reader.read_exact(&mut buf)?;
        trace!("read {len} bytes of bit array storage");
        self.bytes = buf;
        Ok(())
    }
}

impl From<Vec<u8>> for BitArray {
    fn from(bytes:Vec<u8>) -> Self {
        Self {bytes}
    }
}

impl From<&[u8]> for BitArray {
    fn from(bytes:&[u8]) -> Self {
        Self {bytes:bytes.to_vec()}
    }
}

impl From<BitArray> for Vec<u8> {
    fn from(value:BitArray) -> Self {
        value.bytes
    }
}

impl AsRef<[u8]> for BitArray {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
