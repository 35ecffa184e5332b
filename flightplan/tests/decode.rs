use adexp::{MessageParser, ParsedValue};
use flightplan::{Decoder, DecoderOptions, Error, Facility};

const BFD: &str = "-TITLE BFD
-REFDATA -SENDER -FAC EBBUZXZQ -RECVR -FAC EBSZZXZQ -SEQNUM 006
-ARCID DLH151 -SSRCODE A2301 -ADEP EDDW -ADES LEPA -ARCTYP A320
-EOBT 1150 -WKTRC M -FLTRUL I -FLTTYP S -ROUTE N0450F330 DCT WOODY
-FOO IGNORED
NNNN";

const AFTN_FPL: &str = "ZCZC ABC123
FF EBBUZXZQ
151030 EDDWZPZX
(FPL-DLH151-IS
-A320/M-SDFGRWY/S
-EDDW1150
-N0450F330 DCT WOODY
-LEPA0210 LEMH
-DOF/240715 REG/DAIZA)
NNNN";

#[test]
fn decodes_adexp_flightplan() {
    let decoder = Decoder::builtin().expect("builtin catalog");
    let msg = decoder.decode(BFD).expect("BFD should decode");

    assert_eq!(msg.set_name(), "icas_0.1");
    assert_eq!(msg.warnings().len(), 1);

    let fpl = decoder.decode_flightplan(BFD).expect("BFD should decode");
    assert_eq!(fpl.title, "BFD");
    assert_eq!(fpl.arcid, "DLH151");
    assert_eq!(fpl.ssrcode.as_deref(), Some("A2301"));
    assert_eq!(fpl.route.as_deref(), Some("N0450F330 DCT WOODY"));
    assert_eq!(
        fpl.refdata.and_then(|r| r.recvr),
        Some(Facility {
            fac: "EBSZZXZQ".to_string()
        })
    );
}

#[test]
fn decodes_icao_flightplan_alike() {
    let decoder = Decoder::builtin()
        .expect("builtin catalog")
        .with_options(DecoderOptions {
            icao: icao::ParserOptions { aftn_header: true },
            ..Default::default()
        });

    let adexp = decoder.decode_flightplan(BFD).expect("BFD should decode");
    let icao = decoder.decode_flightplan(AFTN_FPL).expect("FPL should decode");

    assert_eq!(icao.title, "FPL");
    assert_eq!(icao.arcid, adexp.arcid);
    assert_eq!(icao.adep, adexp.adep);
    assert_eq!(icao.ades, adexp.ades);
    assert_eq!(icao.arctyp, adexp.arctyp);
    assert_eq!(icao.eobt, adexp.eobt);
    assert_eq!(icao.route, adexp.route);
    assert_eq!(icao.dof.as_deref(), Some("240715"));
    assert_eq!(icao.eelt.as_deref(), Some("0210"));
    assert_eq!(
        icao.refdata.and_then(|r| r.sender).map(|s| s.fac),
        Some("EDDWZPZX".to_string())
    );
}

#[test]
fn emits_json() {
    let decoder = Decoder::builtin().expect("builtin catalog");
    let msg = decoder
        .parse("-TITLE SAM -ARCID AMC101 -BEGIN ADDR -FAC LFPYZMFP -FAC EGLLZPZX -END ADDR -ADEP EGLL -ADES LMML -EOBT 0945 -CTOT 1030")
        .expect("SAM should decode");

    assert_eq!(
        msg.get("ADDR"),
        Some(&ParsedValue::List(vec!["LFPYZMFP".into(), "EGLLZPZX".into()]))
    );

    let json = serde_json::to_value(&msg).expect("serializable");
    assert_eq!(json["category"], "SAM");
    assert_eq!(json["set_name"], "atfcm");
    assert_eq!(json["fields"]["CTOT"], "1030");
    assert_eq!(json["fields"]["ADDR"][1], "EGLLZPZX");
}

#[test]
fn rejects_unknown_formats() {
    let decoder = Decoder::builtin().expect("builtin catalog");
    let err = decoder.decode("hello world").expect_err("neither ADEXP nor ICAO");

    assert!(matches!(err, Error::Unrecognized { .. }));
    assert!(err.to_string().starts_with("unrecognized message"));
}
