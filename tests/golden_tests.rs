//! # Golden Tests
//!
//! Byte-exact configuration streams for complete signs.
//!
//! Every line the sign receives is spelled out here. A change to any of
//! these strings changes what gets written to real hardware, so update them
//! only on purpose.

use pretty_assertions::assert_eq;
use prolite::demo;
use prolite::models::{Graphic, Pixel, Timer};
use prolite::protocol::text;
use prolite::{Display, ProliteError};

const RESET_01: &str = "<ID01>\r\n<ID01><DP*>\r\n<ID01><DT*>\r\n<ID01><DG*>\r\n";

// ============================================================================
// DEMOS
// ============================================================================

#[test]
fn test_simple_demo() {
    let stream = demo::simple().unwrap().configuration(true, None).unwrap();
    let expected = [
        RESET_01,
        "<ID01><PA><FD>Page 1\r\n",
        "<ID01><PB><FD>Page 2\r\n",
        "<ID01><PC><FD>Page 3\r\n",
        "<ID01><TA>*****ABC\r\n",
    ]
    .concat();
    assert_eq!(stream, expected);
}

#[test]
fn test_simple_demo_without_reset_on_page_b() {
    let stream = demo::simple().unwrap().configuration(false, Some(1)).unwrap();
    assert_eq!(
        stream,
        "<ID01><PA><FD>Page 1\r\n\
         <ID01><PB><FD>Page 2\r\n\
         <ID01><PC><FD>Page 3\r\n\
         <ID01><TA>*****ABC\r\n\
         <ID01><RPB>\r\n"
    );
}

#[test]
fn test_showcase_demo() {
    let heart = [
        "BBBBRRRBBBBRRRBBBB",
        "BBBRRRRRBBRRRRRBBB",
        "BBBRRRRRRRRRRRRBBB",
        "BBBBRRRRRRRRRRBBBB",
        "BBBBBRRRRRRRRBBBBB",
        "BBBBBBRRRRRRBBBBBB",
        "BBBBBBBBRRBBBBBBBB",
    ]
    .concat();

    let stream = demo::showcase().unwrap().configuration(true, None).unwrap();
    let expected = [
        RESET_01,
        &format!("<ID01><GB>{}\r\n", heart),
        "<ID01><PA><FB><CC>Welcome <GA>\r\n",
        "<ID01><PB><FI><CP><SB>Open today <GB>\r\n",
        "<ID01><PC><FT>\r\n",
        "<ID01><PD><FH><CM><SE>Closed\r\n",
        "<ID01><TA>*****ABC\r\n",
        "<ID01><TB>0****D\r\n",
    ]
    .concat();
    assert_eq!(stream, expected);
}

// ============================================================================
// FULL STREAMS
// ============================================================================

#[test]
fn test_everything_on_high_address() {
    let mut display = Display::new(0xAB).unwrap();

    display
        .graphics_bank_mut()
        .set_graphic(25, Graphic::filled(Pixel::Yellow))
        .unwrap();
    display
        .page_bank_mut()
        .set_page(25, &format!("{}Last", text::COLOR_RAINBOW))
        .unwrap();
    display.page_bank_mut().set_page(0, "Ünïcödé").unwrap();
    display
        .timer_bank_mut()
        .set_timer(9, Timer::new(6, 23, 59, &[25, 0]).unwrap())
        .unwrap();
    display.set_date_time(2024, 12, 31, 23, 59, 58).unwrap();

    let stream = display.configuration(true, Some(25)).unwrap();
    let expected = [
        "<IDAB>\r\n<IDAB><DP*>\r\n<IDAB><DT*>\r\n<IDAB><DG*>\r\n",
        &format!("<IDAB><GZ>{}\r\n", "Y".repeat(126)),
        "<IDAB><PA>Unicode\r\n",
        "<IDAB><PZ><CP>Last\r\n",
        // Timers are addressed in decimal
        "<ID171><TJ>62359ZA\r\n",
        // 2024-12-31 was a Tuesday
        "<T2412312235958>\r\n",
        "<IDAB><RPZ>\r\n",
    ]
    .concat();
    assert_eq!(stream, expected);
}

#[test]
fn test_every_line_ends_with_crlf() {
    let stream = demo::showcase().unwrap().configuration(true, Some(0)).unwrap();
    assert!(stream.ends_with("\r\n"));
    for line in stream.split_inclusive('\n') {
        assert!(line.ends_with("\r\n"), "bad line ending: {:?}", line);
        assert_eq!(line.matches('\r').count(), 1);
    }
}

#[test]
fn test_escaped_text_cannot_inject_commands() {
    let untrusted = "Hi\r\n<ID02><DP*>\r\n<ID01><PA>pwned<RPA>";
    let mut display = Display::new(1).unwrap();
    display
        .page_bank_mut()
        .set_page(0, &text::escape(untrusted))
        .unwrap();

    assert_eq!(
        display.configuration(false, None).unwrap(),
        "<ID01><PA>Hipwned\r\n"
    );
}

#[test]
fn test_invalid_display_page_emits_nothing() {
    let display = demo::simple().unwrap();
    let err = display.configuration(true, Some(3)).unwrap_err();
    assert!(matches!(err, ProliteError::InvalidPage(3)));
}
