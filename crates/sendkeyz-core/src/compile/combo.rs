// Sendkeyz Combo Sub-parser
// Parses `{...}` blocks: segments, multipliers, pauses, raw escapes

use smallvec::SmallVec;

use super::KeySequenceError;
use crate::action::{ActionList, KeyAction};
use crate::layout::LayoutTable;
use crate::resolver::resolve;

const PAUSE_CMD: &str = "PAUSE=";

/// Parse one combo starting at the `{` at `open`. Emits the compiled
/// actions into `out` and returns the position just past the combo,
/// including any trailing `[N]` repetition.
///
/// Segments without a multiplier are held: their presses collect in `pre`
/// and their releases in `post`, both left to right. Multiplied segments
/// and pauses collect as repeated pairs in `body`, in segment order. The
/// three buffers concatenate once at combo close, which is what makes
/// `{SHIFT+A[2]}` come out as shift down, A tapped twice, shift up.
pub(super) fn parse_combo(
    chars: &[char],
    open: usize,
    layout: &LayoutTable,
    out: &mut ActionList,
) -> Result<usize, KeySequenceError> {
    let mut pre: SmallVec<[KeyAction; 4]> = SmallVec::new();
    let mut body: SmallVec<[KeyAction; 8]> = SmallVec::new();
    let mut post: SmallVec<[KeyAction; 4]> = SmallVec::new();

    let mut token = String::new();
    let mut next_is_raw = false;
    let mut multiplier: usize = 1;
    let mut pos = open;

    loop {
        pos += 1;
        let c = *chars.get(pos).ok_or(KeySequenceError::UnterminatedCombo)?;

        if next_is_raw {
            token.push(c);
            next_is_raw = false;
        } else if c == '\\' {
            next_is_raw = true;
        } else if c == '[' {
            let (value, after) = parse_multiplier(chars, pos)?;
            multiplier = value;
            // A multiplier may only close its segment
            match chars.get(after).copied() {
                Some('+') | Some('}') => {}
                _ => return Err(KeySequenceError::UnterminatedCombo),
            }
            pos = after - 1; // the loop advance lands on the delimiter
        } else if c == '+' || c == '}' {
            close_segment(&token, multiplier, layout, &mut pre, &mut body, &mut post)?;
            token.clear();
            multiplier = 1;
            if c == '}' {
                break;
            }
        } else {
            token.push(c);
        }
    }
    pos += 1;

    // `{...}[N]` repeats the whole compiled combo
    let mut repeat: usize = 1;
    if let Some('[') = chars.get(pos).copied() {
        let (value, after) = parse_multiplier(chars, pos)?;
        repeat = value;
        pos = after;
    }

    log::trace!(
        "combo compiled: {} hold, {} body, {} release, x{}",
        pre.len(),
        body.len(),
        post.len(),
        repeat
    );

    let compiled: SmallVec<[KeyAction; 16]> =
        pre.into_iter().chain(body).chain(post).collect();
    for _ in 0..repeat {
        out.extend(compiled.iter().copied());
    }
    Ok(pos)
}

fn close_segment(
    token: &str,
    multiplier: usize,
    layout: &LayoutTable,
    pre: &mut SmallVec<[KeyAction; 4]>,
    body: &mut SmallVec<[KeyAction; 8]>,
    post: &mut SmallVec<[KeyAction; 4]>,
) -> Result<(), KeySequenceError> {
    if token.is_empty() {
        return Err(KeySequenceError::EmptySegment);
    }

    if let Some(seconds) = parse_pause_directive(token)? {
        for _ in 0..multiplier {
            body.push(KeyAction::Pause(seconds));
        }
        return Ok(());
    }

    match resolve(token, layout) {
        Ok(resolved) => {
            if multiplier != 1 {
                for _ in 0..multiplier {
                    body.push(KeyAction::Press(resolved.key));
                    body.push(KeyAction::Release(resolved.key));
                }
            } else {
                pre.push(KeyAction::Press(resolved.key));
                post.push(KeyAction::Release(resolved.key));
            }
            Ok(())
        }
        Err(err) => {
            // Free text degrades even inside a combo; named keys must
            // resolve.
            if let Some(c) = single_char(token) {
                for _ in 0..multiplier {
                    body.push(KeyAction::TypeLiteral(c));
                }
                Ok(())
            } else {
                Err(err)
            }
        }
    }
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// `PAUSE=<seconds>` segments emit a pause instead of a key action. The
/// prefix is case-sensitive; a bare `PAUSE=` is not a directive and falls
/// through to key resolution.
fn parse_pause_directive(token: &str) -> Result<Option<f64>, KeySequenceError> {
    let Some(arg) = token.strip_prefix(PAUSE_CMD) else {
        return Ok(None);
    };
    if arg.is_empty() {
        return Ok(None);
    }
    let seconds: f64 = arg
        .parse()
        .map_err(|_| KeySequenceError::InvalidPauseArgument(arg.to_string()))?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(KeySequenceError::InvalidPauseArgument(arg.to_string()));
    }
    Ok(Some(seconds))
}

/// Parse a `[N]` bracket starting at the `[` at `open`. Returns the value
/// and the position just past the `]`. Only ASCII digits are accepted.
fn parse_multiplier(chars: &[char], open: usize) -> Result<(usize, usize), KeySequenceError> {
    let mut digits = String::new();
    let mut pos = open;
    loop {
        pos += 1;
        let c = *chars.get(pos).ok_or(KeySequenceError::UnterminatedMultiplier)?;
        if c == ']' {
            break;
        }
        if !c.is_ascii_digit() {
            return Err(KeySequenceError::InvalidMultiplier);
        }
        digits.push(c);
    }
    if digits.is_empty() {
        return Err(KeySequenceError::InvalidMultiplier);
    }
    let value = digits
        .parse()
        .map_err(|_| KeySequenceError::InvalidMultiplier)?;
    Ok((value, pos + 1))
}
