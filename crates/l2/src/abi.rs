//! Contract bindings for the registry on L2 and the resolver interface served to L1.
#![allow(missing_docs)]

use alloy_sol_types::sol;

// Record views of the L2 registry, keyed by the address the record was written under.
sol! {
    #[sol(all_derives)]
    interface IL2Registry {
        function addr(bytes32 node, address owner) external view returns (address);
        function addr(bytes32 node, uint256 coinType, address owner) external view returns (bytes memory);
        function text(bytes32 node, string calldata key, address owner) external view returns (string memory);
        function contenthash(bytes32 node, address owner) external view returns (bytes memory);
    }
}

// Same views on registries that also report when the record was last written. Selectors are
// identical to [`IL2Registry`], only the return types differ.
sol! {
    #[sol(all_derives)]
    interface IL2TimestampedRegistry {
        function addr(bytes32 node, address owner) external view returns (address value, uint256 timestamp);
        function addr(bytes32 node, uint256 coinType, address owner) external view returns (bytes memory value, uint256 timestamp);
        function text(bytes32 node, string calldata key, address owner) external view returns (string memory value, uint256 timestamp);
        function contenthash(bytes32 node, address owner) external view returns (bytes memory value, uint256 timestamp);
    }
}

// The resolver calls forwarded by the L1 contract through CCIP-Read.
sol! {
    #[sol(all_derives)]
    interface IL1Resolver {
        function addr(bytes32 node) external view returns (address);
        function addr(bytes32 node, uint256 coinType) external view returns (bytes memory);
        function text(bytes32 node, string calldata key) external view returns (string memory);
        function contenthash(bytes32 node) external view returns (bytes memory);
    }
}
