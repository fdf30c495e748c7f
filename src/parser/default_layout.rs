//! Built-in US QWERTY layout used to seed new layout files.

use crate::error::ParseError;
use crate::models::Layout;
use crate::parser::layout::parse_layout_str;

/// Layout text for a plain US QWERTY keyboard.
pub const DEFAULT_LAYOUT: &str = r#"# US QWERTY, written in the xkblayout format.
QWERTY

None
`  1  2  3  4  5  6  7  8  9  0  -  =  Back
Tab q  w  e  r  t  y  u  i  o  p  [  ]    \
Caps a s  d  f  g  h  j  k  l  ;  '   Enter
Shift z x c  v  b  n  m  ,  .  /      Shift

Shift
~  !  @  #  $  %  ^  &  *  (  )  _  +  Back
Tab Q  W  E  R  T  Y  U  I  O  P  {  }    |
Caps A S  D  F  G  H  J  K  L  :  "   Enter
Shift Z X C  V  B  N  M  <  >  ?      Shift
"#;

/// Parses [`DEFAULT_LAYOUT`].
pub fn default_layout() -> Result<Layout, ParseError> {
    parse_layout_str(DEFAULT_LAYOUT)
}
