use dnswire::dns::constants::{Opcode, Rcode};
use dnswire::dns::enums::{RecordClass, RecordType};

#[test]
fn test_record_type_code_points() {
    assert_eq!(u16::from(RecordType::A), 1);
    assert_eq!(u16::from(RecordType::NS), 2);
    assert_eq!(u16::from(RecordType::CNAME), 5);
    assert_eq!(u16::from(RecordType::SOA), 6);
    assert_eq!(u16::from(RecordType::PTR), 12);
    assert_eq!(u16::from(RecordType::MX), 15);
    assert_eq!(u16::from(RecordType::TXT), 16);
    assert_eq!(RecordType::from(1), RecordType::A);
    assert_eq!(RecordType::from(16), RecordType::TXT);
    assert_eq!(RecordType::from(28), RecordType::AAAA);
}

#[test]
fn test_unknown_type_preserved() {
    let raw = 0x2020;
    let rtype = RecordType::from(raw);
    assert_eq!(rtype, RecordType::Unknown(0x2020));
    assert_eq!(u16::from(rtype), raw);
}

#[test]
fn test_record_class_code_points() {
    assert_eq!(u16::from(RecordClass::IN), 1);
    assert_eq!(u16::from(RecordClass::CS), 2);
    assert_eq!(u16::from(RecordClass::CH), 3);
    assert_eq!(u16::from(RecordClass::HS), 4);
    assert_eq!(RecordClass::from(0x2121), RecordClass::Unknown(0x2121));
}

#[test]
fn test_opcode_values() {
    assert_eq!(u8::from(Opcode::QUERY), 0);
    assert_eq!(u8::from(Opcode::IQUERY), 1);
    assert_eq!(u8::from(Opcode::STATUS), 2);
    assert_eq!(u8::from(Opcode::NOTIFY), 4);
    assert_eq!(u8::from(Opcode::UPDATE), 5);
    assert_eq!(u8::from(Opcode::DSO), 6);
    assert_eq!(Opcode::from(5), Opcode::UPDATE);
}

#[test]
fn test_rcode_collision_preserved() {
    // The extension history assigned 16 twice; both names stay usable.
    assert_eq!(Rcode::BADVERS, 16);
    assert_eq!(Rcode::BADSIG, 16);
    assert_eq!(Rcode::BADVERS, Rcode::BADSIG);
}

#[test]
fn test_rcode_descriptions() {
    assert_eq!(Rcode::description(Rcode::NOERROR), None);
    assert_eq!(Rcode::description(Rcode::SERVFAIL), Some("Server Failure"));
    assert_eq!(
        Rcode::description(Rcode::NXDOMAIN),
        Some("Non-Existent Domain")
    );
    assert_eq!(
        Rcode::description(Rcode::BADCOOKIE),
        Some("Bad/missing Server Cookie")
    );
    assert_eq!(Rcode::description(42), None);
}
