// Owned-operand forms of the reference operator impls.
//
// The arithmetic lives on `&T op &U` (or `&T op f64`); these arms let callers
// write `a + b` on owned values without repeating the logic.

macro_rules! forward_owned_binop {
    (ref $imp:ident, $method:ident, $lhs:ty, $rhs:ty, $out:ty) => {
        impl std::ops::$imp<$rhs> for $lhs {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: $rhs) -> $out {
                std::ops::$imp::$method(&self, &rhs)
            }
        }
    };
    (scalar_rhs $imp:ident, $method:ident, $lhs:ty, $out:ty) => {
        impl std::ops::$imp<f64> for $lhs {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: f64) -> $out {
                std::ops::$imp::$method(&self, rhs)
            }
        }
    };
    (scalar_lhs $imp:ident, $method:ident, $rhs:ty, $out:ty) => {
        impl std::ops::$imp<$rhs> for f64 {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: $rhs) -> $out {
                std::ops::$imp::$method(self, &rhs)
            }
        }
    };
}

macro_rules! forward_owned_neg {
    ($type:ty) => {
        impl std::ops::Neg for $type {
            type Output = $type;

            #[inline]
            fn neg(self) -> $type {
                -&self
            }
        }
    };
}
