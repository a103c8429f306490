use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::errors::{FlowTagError, Result};

/// IANA assigned internet protocol numbers, embedded so resolution does not
/// depend on the host's /etc/protocols. Names follow the IANA keyword column,
/// uppercased. Snapshot of the assigned-numbers registry, 2024 revision.
const PROTOCOL_NUMBERS: &[(u8, &str)] = &[
    (0, "HOPOPT"),
    (1, "ICMP"),
    (2, "IGMP"),
    (3, "GGP"),
    (4, "IPV4"),
    (5, "ST"),
    (6, "TCP"),
    (7, "CBT"),
    (8, "EGP"),
    (9, "IGP"),
    (10, "BBN-RCC-MON"),
    (11, "NVP-II"),
    (12, "PUP"),
    (13, "ARGUS"),
    (14, "EMCON"),
    (15, "XNET"),
    (16, "CHAOS"),
    (17, "UDP"),
    (18, "MUX"),
    (19, "DCN-MEAS"),
    (20, "HMP"),
    (21, "PRM"),
    (22, "XNS-IDP"),
    (23, "TRUNK-1"),
    (24, "TRUNK-2"),
    (25, "LEAF-1"),
    (26, "LEAF-2"),
    (27, "RDP"),
    (28, "IRTP"),
    (29, "ISO-TP4"),
    (30, "NETBLT"),
    (31, "MFE-NSP"),
    (32, "MERIT-INP"),
    (33, "DCCP"),
    (34, "3PC"),
    (35, "IDPR"),
    (36, "XTP"),
    (37, "DDP"),
    (38, "IDPR-CMTP"),
    (39, "TP++"),
    (40, "IL"),
    (41, "IPV6"),
    (42, "SDRP"),
    (43, "IPV6-ROUTE"),
    (44, "IPV6-FRAG"),
    (45, "IDRP"),
    (46, "RSVP"),
    (47, "GRE"),
    (48, "DSR"),
    (49, "BNA"),
    (50, "ESP"),
    (51, "AH"),
    (52, "I-NLSP"),
    (53, "SWIPE"),
    (54, "NARP"),
    (55, "MOBILE"),
    (56, "TLSP"),
    (57, "SKIP"),
    (58, "IPV6-ICMP"),
    (59, "IPV6-NONXT"),
    (60, "IPV6-OPTS"),
    (62, "CFTP"),
    (64, "SAT-EXPAK"),
    (65, "KRYPTOLAN"),
    (66, "RVD"),
    (67, "IPPC"),
    (69, "SAT-MON"),
    (70, "VISA"),
    (71, "IPCV"),
    (72, "CPNX"),
    (73, "CPHB"),
    (74, "WSN"),
    (75, "PVP"),
    (76, "BR-SAT-MON"),
    (77, "SUN-ND"),
    (78, "WB-MON"),
    (79, "WB-EXPAK"),
    (80, "ISO-IP"),
    (81, "VMTP"),
    (82, "SECURE-VMTP"),
    (83, "VINES"),
    (84, "IPTM"),
    (85, "NSFNET-IGP"),
    (86, "DGP"),
    (87, "TCF"),
    (88, "EIGRP"),
    (89, "OSPF"),
    (90, "SPRITE-RPC"),
    (91, "LARP"),
    (92, "MTP"),
    (93, "AX.25"),
    (94, "IPIP"),
    (95, "MICP"),
    (96, "SCC-SP"),
    (97, "ETHERIP"),
    (98, "ENCAP"),
    (100, "GMTP"),
    (101, "IFMP"),
    (102, "PNNI"),
    (103, "PIM"),
    (104, "ARIS"),
    (105, "SCPS"),
    (106, "QNX"),
    (107, "A/N"),
    (108, "IPCOMP"),
    (109, "SNP"),
    (110, "COMPAQ-PEER"),
    (111, "IPX-IN-IP"),
    (112, "VRRP"),
    (113, "PGM"),
    (115, "L2TP"),
    (116, "DDX"),
    (117, "IATP"),
    (118, "STP"),
    (119, "SRP"),
    (120, "UTI"),
    (121, "SMP"),
    (122, "SM"),
    (123, "PTP"),
    (124, "ISIS"),
    (125, "FIRE"),
    (126, "CRTP"),
    (127, "CRUDP"),
    (128, "SSCOPMCE"),
    (129, "IPLT"),
    (130, "SPS"),
    (131, "PIPE"),
    (132, "SCTP"),
    (133, "FC"),
    (134, "RSVP-E2E-IGNORE"),
    (135, "MOBILITY-HEADER"),
    (136, "UDPLITE"),
    (137, "MPLS-IN-IP"),
    (138, "MANET"),
    (139, "HIP"),
    (140, "SHIM6"),
    (141, "WESP"),
    (142, "ROHC"),
    (143, "ETHERNET"),
    (144, "AGGFRAG"),
    (145, "NSH"),
];

lazy_static! {
    static ref NAME_TO_NUMBER: HashMap<&'static str, u8> = PROTOCOL_NUMBERS
        .iter()
        .map(|&(number, name)| (name, number))
        .collect();
    static ref NUMBER_TO_NAME: HashMap<u8, &'static str> =
        PROTOCOL_NUMBERS.iter().copied().collect();
}

/// Resolves a protocol name to its decimal number string.
///
/// Matching is case-insensitive against the embedded IANA table. This is the
/// strict direction: lookup-table rows must name a real protocol, so an
/// unrecognized name is an error rather than a placeholder.
///
/// ### Arguments
///
/// * `name` - The protocol name (e.g., "TCP", "udp").
///
/// ### Returns
///
/// The protocol number as a string, or `FlowTagError::InvalidProtocol`.
pub fn resolve_number(name: &str) -> Result<String> {
    NAME_TO_NUMBER
        .get(name.to_uppercase().as_str())
        .map(|number| number.to_string())
        .ok_or_else(|| FlowTagError::InvalidProtocol {
            name: name.to_string(),
        })
}

/// Resolves a protocol number to its canonical uppercase name.
///
/// This is the permissive direction, used only for reporting: unknown numbers
/// render as `Unknown Protocol (<number>)` instead of failing.
pub fn resolve_name(number: u8) -> String {
    match NUMBER_TO_NAME.get(&number) {
        Some(name) => (*name).to_string(),
        None => format!("Unknown Protocol ({})", number),
    }
}

/// Resolves the raw protocol field of a flow record to a display name.
///
/// Flow logs carry the protocol as an unvalidated text field. A token that is
/// not a valid protocol number renders as `Unknown Protocol (<token>)` with
/// the literal token embedded, so two distinct raw values never collapse into
/// the same placeholder.
pub fn resolve_name_str(raw: &str) -> String {
    match raw.parse::<u8>() {
        Ok(number) => resolve_name(number),
        Err(_) => format!("Unknown Protocol ({})", raw),
    }
}
