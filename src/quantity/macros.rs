macro_rules! quantity {
    ($(#[$meta:meta])* $name:ident, via: $container:tt, suffix: $suffix:literal, precision: $precision:literal) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(
            ::derive_more::Add,
            ::derive_more::AddAssign,
            ::derive_more::FromStr,
            ::derive_more::Sub,
            ::derive_more::SubAssign,
            ::derive_more::Sum,
            ::serde::Deserialize,
            ::serde::Serialize,
            ::std::clone::Clone,
            ::std::marker::Copy,
        )]
        #[serde(transparent)]
        #[must_use]
        pub struct $name(pub $container);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(formatter, "{:.*} {}", $precision, self.0, $suffix)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(formatter, "{:.*}{}", $precision, self.0, $suffix)
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl $name {
            pub const ZERO: Self = Self(<$container as $crate::quantity::Zero>::ZERO);
        }

        ordering!($name, $container);
    };
}

macro_rules! ordering {
    ($name:ty,f64) => {
        derive_neg!($name);
        derive_scale!($name);
        derive_sign!($name);
        ordered_float!($name);
    };
    ($name:ty,u16) => {
        derive_ordering!($name);
    };
}

macro_rules! ordered_float {
    ($name:ty) => {
        impl ::std::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl ::std::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                ::ordered_float::OrderedFloat(self.0).cmp(&::ordered_float::OrderedFloat(other.0))
            }
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                ::ordered_float::OrderedFloat(self.0).eq(&::ordered_float::OrderedFloat(other.0))
            }
        }

        impl Eq for $name {}
    };
}

macro_rules! derive_neg {
    ($name:ty) => {
        impl ::std::ops::Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }
    };
}

/// Scalar scaling and same-unit ratios.
macro_rules! derive_scale {
    ($name:ty) => {
        impl ::std::ops::Mul<f64> for $name {
            type Output = Self;

            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl ::std::ops::Div<f64> for $name {
            type Output = Self;

            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl ::std::ops::Div<Self> for $name {
            type Output = f64;

            fn div(self, rhs: Self) -> Self::Output {
                self.0 / rhs.0
            }
        }
    };
}

macro_rules! derive_sign {
    ($name:ty) => {
        impl $name {
            pub fn is_positive(self) -> bool {
                self.0 > 0.0
            }

            /// Replace negative and `NaN` values with zero.
            pub fn non_negative(self) -> Self {
                if self.0 > 0.0 { self } else { Self(0.0) }
            }
        }
    };
}

macro_rules! derive_ordering {
    ($name:ty) => {
        impl ::std::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl ::std::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0.eq(&other.0)
            }
        }

        impl ::std::cmp::Eq for $name {}
    };
}

/// `$lhs × $rhs = $output`, in both operand orders.
macro_rules! implement_mul {
    ($lhs:ty, $rhs:ty, $output:ident) => {
        impl ::std::ops::Mul<$rhs> for $lhs {
            type Output = $output;

            fn mul(self, rhs: $rhs) -> Self::Output {
                $output(self.0 * rhs.0)
            }
        }

        impl ::std::ops::Mul<$lhs> for $rhs {
            type Output = $output;

            fn mul(self, rhs: $lhs) -> Self::Output {
                $output(self.0 * rhs.0)
            }
        }
    };
}

/// `$lhs ÷ $rhs = $output`.
macro_rules! implement_div {
    ($lhs:ty, $rhs:ty, $output:ident) => {
        impl ::std::ops::Div<$rhs> for $lhs {
            type Output = $output;

            fn div(self, rhs: $rhs) -> Self::Output {
                $output(self.0 / rhs.0)
            }
        }
    };
}
