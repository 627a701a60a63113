use std::error::Error;
use std::path::PathBuf;
use striplab::{
    read_board_file, write_board_file, CipherBoard, FrameOrder, StriplabError, StripSet,
};
use tempfile::{tempdir, TempDir};

/// A board persisted to disk with a deterministic configuration.
struct BoardFixture {
    _dir: TempDir,
    path: PathBuf,
}

impl BoardFixture {
    fn new() -> Result<Self, Box<dyn Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("board.json");

        let mut board = CipherBoard::new();
        board.configure(
            StripSet::keyed("HALBERD", 7),
            FrameOrder::from_keyword("LEMON", Some(5))?,
        );
        board.set_gap_enc(9)?;
        board.set_gap_dec(9)?;
        write_board_file(&path, &board)?;

        Ok(Self { _dir: dir, path })
    }

    fn reload(&self) -> Result<CipherBoard, Box<dyn Error>> {
        Ok(read_board_file(&self.path)?)
    }
}

#[test]
fn persisted_board_round_trips_messages() -> Result<(), Box<dyn Error>> {
    let fixture = BoardFixture::new()?;
    let board = fixture.reload()?;

    let cipher = board.encrypt("THE FRAME ORDER IS THE KEY")?;
    assert_eq!(board.decrypt(&cipher)?, "THEFRAMEORDERISTHEKEY");
    Ok(())
}

#[test]
fn reloaded_board_matches_written_configuration() -> Result<(), Box<dyn Error>> {
    let fixture = BoardFixture::new()?;
    let board = fixture.reload()?;

    assert_eq!(board.strips.len(), 7);
    assert_eq!(board.frame_order.slots(), &[1, 0, 2, 4, 3]);
    assert_eq!(board.gap_enc, 9);
    assert_eq!(board.gap_dec, 9);
    Ok(())
}

#[test]
fn board_json_is_hand_editable() -> Result<(), Box<dyn Error>> {
    let fixture = BoardFixture::new()?;
    let raw = std::fs::read_to_string(&fixture.path)?;

    // Plain field names, strips as bare strings, frame order as a
    // bare array
    assert!(raw.contains("\"version\": 1"));
    assert!(raw.contains("\"strips\""));
    assert!(raw.contains("\"HALBERDCFGIJKMNOPQSTUVWXYZ\""));
    assert!(raw.contains("\"frame_order\""));
    assert!(raw.contains("\"gap_enc\": 9"));
    Ok(())
}

#[test]
fn every_gap_round_trips() -> Result<(), Box<dyn Error>> {
    let strips = StripSet::random(10);
    let frame = FrameOrder::sequential(10, 10)?;
    let plain = "SLIDE EACH STRIP AND READ THE OFFSET ROW";

    for gap in 1..=25 {
        let cipher = striplab::encrypt(plain, &frame, &strips, gap)?;
        let back = striplab::decrypt(&cipher, &frame, &strips, gap)?;
        assert_eq!(back, "SLIDEEACHSTRIPANDREADTHEOFFSETROW", "gap {}", gap);
    }
    Ok(())
}

#[test]
fn regenerating_fewer_strips_leaves_stale_slots() -> Result<(), Box<dyn Error>> {
    let fixture = BoardFixture::new()?;
    let mut board = fixture.reload()?;

    // Shrink the set under the mounted order; the slot holding strip 4
    // now dangles
    board.strips = StripSet::keyed("HALBERD", 3);
    match board.encrypt("ABCDEF") {
        Err(StriplabError::StripIndexOutOfRange {
            index: 4,
            available: 3,
        }) => {}
        other => panic!("expected StripIndexOutOfRange, got {:?}", other),
    }
    Ok(())
}

#[test]
fn explicit_strips_with_manual_order_cipher_correctly() -> Result<(), Box<dyn Error>> {
    let strips = StripSet::from_lines(
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ\n\
         ZEBRACDFGHIJKLMNOPQSTUVWXY\n\
         QUARTZBCDEFGHIJKLMNOPSVWXY\n",
    );
    assert_eq!(strips.len(), 3);

    let frame = FrameOrder::from_manual(&[2, 0, 1], 3)?;
    let cipher = striplab::encrypt("CHECKPOINT", &frame, &strips, 6)?;
    let back = striplab::decrypt(&cipher, &frame, &strips, 6)?;
    assert_eq!(back, "CHECKPOINT");
    Ok(())
}

#[test]
fn malformed_strip_fails_only_when_touched() -> Result<(), Box<dyn Error>> {
    // Second strip has no Q; messages avoiding it still work
    let strips = StripSet::from_lines(
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ\n\
         ABCDEFGHIJKLMNOPRSTUVWXYZ\n",
    );
    let frame = FrameOrder::from(vec![0, 1]);

    let cipher = striplab::encrypt("HI", &frame, &strips, 3)?;
    assert_eq!(cipher.len(), 2);

    match striplab::encrypt("QQ", &frame, &strips, 3) {
        Err(StriplabError::LetterNotFound {
            letter: 'Q',
            strip: 1,
        }) => {}
        other => panic!("expected LetterNotFound, got {:?}", other),
    }
    Ok(())
}
