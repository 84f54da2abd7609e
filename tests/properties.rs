//! Property-based tests for the ZDO codec.
//!
//! These tests use proptest to verify invariants hold for all inputs:
//! - Byte-pair reversal is its own inverse
//! - Built frames decode back to the same payload
//! - The sequence counter wraps
//! - Arbitrary payloads never panic the decoder

use proptest::prelude::*;
use zdo::types::{Binding, LeaveRequest, MatchDescriptorRequest, TableRequest};
use zdo::{
    BuilderConfig, ClusterId, DecodeOutcome, FrameBuilder, ZdoFrame, ZdoPayload, decode,
    reverse_byte_pairs,
};

// Strategy for lowercase hex strings of `bytes` bytes
fn hex_strategy(bytes: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<u8>(), bytes).prop_map(hex::encode)
}

// Strategy for cluster id lists as carried in match descriptor requests
fn cluster_list_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(hex_strategy(2), 0..8)
}

fn round_trip(payload: &ZdoPayload) -> (DecodeOutcome, ZdoFrame) {
    let mut builder = FrameBuilder::new(|| 0, BuilderConfig::default());
    let mut sent = ZdoFrame::request(payload.clone());
    builder.build(&mut sent).unwrap();

    let mut received = ZdoFrame::received(payload.cluster(), sent.data.unwrap());
    let outcome = decode(&mut received).unwrap();
    (outcome, received)
}

#[test]
fn prop_reverse_byte_pairs_is_self_inverse() {
    proptest!(|(hex in (0usize..16).prop_flat_map(hex_strategy))| {
        let once = reverse_byte_pairs(&hex).unwrap();
        prop_assert_eq!(once.len(), hex.len());
        prop_assert_eq!(reverse_byte_pairs(&once).unwrap(), hex);
    });
}

#[test]
fn prop_odd_length_hex_rejected() {
    proptest!(|(hex in (0usize..8).prop_flat_map(hex_strategy))| {
        let odd = format!("{hex}0");
        prop_assert!(reverse_byte_pairs(&odd).is_err());
    });
}

#[test]
fn prop_leave_request_round_trip() {
    proptest!(|(addr64 in hex_strategy(8), options in any::<u8>())| {
        let payload = ZdoPayload::ManagementLeaveRequest(LeaveRequest { addr64, options });
        let (outcome, received) = round_trip(&payload);
        prop_assert_eq!(outcome, DecodeOutcome::Parsed { unread: 0 });
        prop_assert_eq!(received.payload, Some(payload));
    });
}

#[test]
fn prop_match_descriptor_request_round_trip() {
    proptest!(|(
        addr16 in hex_strategy(2),
        profile_id in hex_strategy(2),
        input_clusters in cluster_list_strategy(),
        output_clusters in cluster_list_strategy(),
    )| {
        let payload = ZdoPayload::MatchDescriptorRequest(MatchDescriptorRequest {
            addr16,
            profile_id,
            input_clusters,
            output_clusters,
        });
        let (outcome, received) = round_trip(&payload);
        prop_assert_eq!(outcome, DecodeOutcome::Parsed { unread: 0 });
        prop_assert_eq!(received.payload, Some(payload));
    });
}

#[test]
fn prop_bind_request_round_trip() {
    proptest!(|(
        src in hex_strategy(8),
        dst in hex_strategy(8),
        cluster in hex_strategy(2),
        src_endpoint in any::<u8>(),
        dst_endpoint in any::<u8>(),
    )| {
        let payload = ZdoPayload::BindRequest(Binding::to_extended(
            src,
            src_endpoint,
            cluster.as_str(),
            dst,
            dst_endpoint,
        ));
        let (outcome, received) = round_trip(&payload);
        prop_assert_eq!(outcome, DecodeOutcome::Parsed { unread: 0 });
        prop_assert_eq!(received.payload, Some(payload));
    });
}

#[test]
fn prop_sequence_counter_wraps() {
    proptest!(|(start in any::<u8>(), steps in 1usize..600)| {
        let mut builder = FrameBuilder::new(|| 0, BuilderConfig::new().initial_seq(start));
        let mut last = start;
        for _ in 0..steps {
            let next = builder.next_zdo_seq();
            prop_assert_eq!(next, last.wrapping_add(1));
            last = next;
        }
        prop_assert_eq!(builder.seq(), last);
    });
}

#[test]
fn prop_built_frame_reuses_given_seq() {
    proptest!(|(seq in any::<u8>(), start_index in any::<u8>())| {
        let mut builder = FrameBuilder::new(|| 0, BuilderConfig::default());
        let mut frame = ZdoFrame::request(ZdoPayload::ManagementLqiRequest(TableRequest {
            start_index,
        }))
        .with_zdo_seq(seq);
        builder.build(&mut frame).unwrap();
        prop_assert_eq!(frame.data.as_deref(), Some(&[seq, start_index][..]));
        prop_assert_eq!(builder.seq(), 0);
    });
}

#[test]
fn prop_decode_never_panics() {
    proptest!(|(
        cluster in proptest::sample::select(ClusterId::ALL.to_vec()),
        data in proptest::collection::vec(any::<u8>(), 0..64),
    )| {
        let mut frame = ZdoFrame::received(cluster, data.clone());
        if decode(&mut frame).is_ok() {
            prop_assert_eq!(frame.zdo_seq, data.first().copied());
        }
    });
}
