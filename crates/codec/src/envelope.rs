use alloy_primitives::{Bytes, B256};
use alloy_sol_types::SolValue;
use resolver_gateway_primitives::{RecordValue, ResponseEnvelope};

/// The Solidity layout of the response envelope.
type EnvelopeTuple = (Bytes, B256, Bytes, B256, B256, B256);

/// ABI encodes the record value to its declared type: `address`, `bytes` or `string`.
pub fn encode_record_value(value: &RecordValue) -> Bytes {
    match value {
        RecordValue::Address(address) => address.abi_encode(),
        RecordValue::Bytes(bytes) => bytes.abi_encode(),
        RecordValue::String(string) => string.abi_encode(),
    }
    .into()
}

/// ABI encodes the envelope as `(bytes, bytes32, bytes, bytes32, bytes32, bytes32)`.
pub fn encode_envelope(envelope: &ResponseEnvelope) -> Bytes {
    let ResponseEnvelope { value, slot, proof, state_root, bridge_storage_root, block_hash } =
        envelope;
    (value.clone(), *slot, proof.clone(), *state_root, *bridge_storage_root, *block_hash)
        .abi_encode_params()
        .into()
}

/// Decodes an envelope produced by [`encode_envelope`].
pub fn decode_envelope(data: &[u8]) -> Result<ResponseEnvelope, alloy_sol_types::Error> {
    let (value, slot, proof, state_root, bridge_storage_root, block_hash) =
        EnvelopeTuple::abi_decode_params(data)?;
    Ok(ResponseEnvelope { value, slot, proof, state_root, bridge_storage_root, block_hash })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{hex, Address, U256};

    #[test]
    fn test_encode_address_value() {
        let encoded = encode_record_value(&RecordValue::Address(Address::repeat_byte(0xbb)));
        assert_eq!(encoded.len(), 32);
        assert_eq!(&encoded[..12], &[0u8; 12]);
        assert_eq!(&encoded[12..], &[0xbb; 20]);
    }

    #[test]
    fn test_encode_bytes_value() {
        let encoded = encode_record_value(&RecordValue::Bytes(Bytes::from_static(&hex!("e301"))));
        // offset, length, padded data.
        assert_eq!(encoded.len(), 96);
        assert_eq!(U256::from_be_slice(&encoded[..32]), U256::from(32));
        assert_eq!(U256::from_be_slice(&encoded[32..64]), U256::from(2));
        assert_eq!(&encoded[64..66], &hex!("e301"));
        assert_eq!(Bytes::abi_decode(&encoded).unwrap(), Bytes::from_static(&hex!("e301")));
    }

    #[test]
    fn test_encode_string_value() {
        let encoded = encode_record_value(&RecordValue::String("ipfs://QmAvatar".to_string()));
        assert_eq!(String::abi_decode(&encoded).unwrap(), "ipfs://QmAvatar");
    }

    #[test]
    fn test_envelope_layout() {
        let envelope = ResponseEnvelope {
            value: encode_record_value(&RecordValue::Address(Address::repeat_byte(0xbb))),
            slot: B256::repeat_byte(0x01),
            proof: Bytes::from_static(&hex!("c2c0c0")),
            state_root: B256::repeat_byte(0x02),
            bridge_storage_root: B256::repeat_byte(0x03),
            block_hash: B256::repeat_byte(0x04),
        };

        let encoded = encode_envelope(&envelope);

        // head: 6 words, with offsets for the two dynamic members.
        assert_eq!(U256::from_be_slice(&encoded[..32]), U256::from(6 * 32));
        assert_eq!(&encoded[32..64], envelope.slot.as_slice());
        assert_eq!(&encoded[96..128], envelope.state_root.as_slice());
        assert_eq!(&encoded[128..160], envelope.bridge_storage_root.as_slice());
        assert_eq!(&encoded[160..192], envelope.block_hash.as_slice());

        assert_eq!(decode_envelope(&encoded).unwrap(), envelope);
    }
}
