use crate::ProofEncodingError;

use alloy_primitives::Bytes;
use alloy_rlp::{BufMut, Decodable, Encodable, Header};

/// A structurally decoded RLP item.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum RlpItem {
    /// A byte string.
    Bytes(Bytes),
    /// A list of items.
    List(Vec<RlpItem>),
}

impl RlpItem {
    /// Returns the list items, or [`None`] for a byte string.
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            Self::Bytes(_) => None,
        }
    }

    fn payload_length(&self) -> usize {
        match self {
            Self::Bytes(bytes) => bytes[..].length(),
            Self::List(items) => items.iter().map(Encodable::length).sum(),
        }
    }
}

impl Encodable for RlpItem {
    fn encode(&self, out: &mut dyn BufMut) {
        match self {
            Self::Bytes(bytes) => bytes[..].encode(out),
            Self::List(items) => {
                Header { list: true, payload_length: self.payload_length() }.encode(out);
                for item in items {
                    item.encode(out);
                }
            }
        }
    }

    fn length(&self) -> usize {
        match self {
            Self::Bytes(_) => self.payload_length(),
            Self::List(_) => {
                let payload_length = self.payload_length();
                payload_length + alloy_rlp::length_of_length(payload_length)
            }
        }
    }
}

impl Decodable for RlpItem {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let header = Header::decode(buf)?;
        if buf.len() < header.payload_length {
            return Err(alloy_rlp::Error::InputTooShort);
        }
        let (mut payload, rest) = buf.split_at(header.payload_length);
        *buf = rest;

        if !header.list {
            return Ok(Self::Bytes(Bytes::copy_from_slice(payload)));
        }

        let mut items = Vec::new();
        while !payload.is_empty() {
            items.push(Self::decode(&mut payload)?);
        }
        Ok(Self::List(items))
    }
}

/// Decodes a single trie node, rejecting trailing data.
fn decode_node(node: &[u8]) -> Result<RlpItem, ProofEncodingError> {
    let mut buf = node;
    let item = RlpItem::decode(&mut buf)?;
    if !buf.is_empty() {
        return Err(ProofEncodingError::TrailingBytes(buf.len()));
    }
    Ok(item)
}

fn decode_nodes(nodes: &[Bytes]) -> Result<RlpItem, ProofEncodingError> {
    nodes.iter().map(|node| decode_node(node)).collect::<Result<Vec<_>, _>>().map(RlpItem::List)
}

/// Encodes the account and storage proofs as the RLP list `[accountProof, storageProof]`.
///
/// Each node arrives RLP encoded on its own and is decoded first so that it is nested in the
/// outer list as a structure rather than as an opaque byte string.
pub fn encode_proofs(
    account_proof: &[Bytes],
    storage_proof: &[Bytes],
) -> Result<Bytes, ProofEncodingError> {
    let proofs = RlpItem::List(vec![decode_nodes(account_proof)?, decode_nodes(storage_proof)?]);
    Ok(alloy_rlp::encode(&proofs).into())
}

/// Decodes an envelope produced by [`encode_proofs`] back into the structural account and
/// storage proof nodes.
pub fn decode_proofs(encoded: &[u8]) -> Result<(Vec<RlpItem>, Vec<RlpItem>), ProofEncodingError> {
    match decode_node(encoded)? {
        RlpItem::List(proofs) => match <[RlpItem; 2]>::try_from(proofs) {
            Ok([RlpItem::List(account), RlpItem::List(storage)]) => Ok((account, storage)),
            _ => Err(ProofEncodingError::UnexpectedShape),
        },
        RlpItem::Bytes(_) => Err(ProofEncodingError::UnexpectedShape),
    }
}
