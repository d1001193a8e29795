//! "Is square `sq` attacked by side `s`?" -- the primitive that both
//! `makemove`'s legality check and castling's pass-through-check rule
//! are built on.

use super::Engine;
use crate::basetypes::*;
use crate::tables::{mailbox_step, SLIDE};

impl Engine {
    /// `true` if `side`'s king is currently attacked by the other side.
    pub fn in_check(&self, side: Color) -> bool {
        for sq in 0..SQUARE_COUNT {
            if self.piece[sq] == KING && self.color[sq] == side {
                return self.attack(sq as Square, side ^ 1);
            }
        }
        false
    }

    /// `true` if square `sq` is attacked by any piece of side `s`.
    pub fn attack(&self, sq: Square, s: Color) -> bool {
        for frsq in 0..SQUARE_COUNT as Square {
            if self.color[frsq as usize] != s {
                continue;
            }
            let piece = self.piece[frsq as usize];
            if piece == PAWN {
                if s == LIGHT {
                    if file(frsq) != FILE_A && frsq + DELTA_NW == sq {
                        return true;
                    }
                    if file(frsq) != FILE_H && frsq + DELTA_NE == sq {
                        return true;
                    }
                } else {
                    if file(frsq) != FILE_A && frsq + DELTA_SW == sq {
                        return true;
                    }
                    if file(frsq) != FILE_H && frsq + DELTA_SE == sq {
                        return true;
                    }
                }
                continue;
            }
            for stride in 0..crate::tables::OFFSETS[piece as usize] {
                let mut tosq = frsq;
                loop {
                    tosq = mailbox_step(tosq, piece, stride);
                    if tosq == SQ_NIL {
                        break;
                    }
                    if tosq == sq {
                        return true;
                    }
                    if self.color[tosq as usize] != NO_COLOR {
                        break;
                    }
                    if !SLIDE[piece as usize] {
                        break;
                    }
                }
            }
        }
        false
    }
}
