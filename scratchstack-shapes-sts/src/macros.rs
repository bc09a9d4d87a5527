/// Generate getters and setters for the optional members of a shape.
///
/// Each member is declared as `kind field / setter` where `kind` is one of:
/// * `str`: `Option<String>`, read back as `Option<&str>`.
/// * `copy`: `Option<T>` for a `Copy` type, read back by value.
/// * `shape`: `Option<T>` for a nested shape, read back as `Option<&T>`.
/// * `list`: `Option<Vec<T>>`, read back as `Option<&[T]>`.
macro_rules! shape_accessors {
    (@member str $field:ident $setter:ident) => {
        #[inline]
        pub fn $field(&self) -> Option<&str> {
            self.$field.as_deref()
        }

        #[inline]
        pub fn $setter(&mut self, value: Option<String>) {
            self.$field = value;
        }
    };

    (@member copy $field:ident $setter:ident $ty:ty) => {
        #[inline]
        pub fn $field(&self) -> Option<$ty> {
            self.$field
        }

        #[inline]
        pub fn $setter(&mut self, value: Option<$ty>) {
            self.$field = value;
        }
    };

    (@member shape $field:ident $setter:ident $ty:ty) => {
        #[inline]
        pub fn $field(&self) -> Option<&$ty> {
            self.$field.as_ref()
        }

        #[inline]
        pub fn $setter(&mut self, value: Option<$ty>) {
            self.$field = value;
        }
    };

    (@member list $field:ident $setter:ident $ty:ty) => {
        #[inline]
        pub fn $field(&self) -> Option<&[$ty]> {
            self.$field.as_deref()
        }

        #[inline]
        pub fn $setter(&mut self, value: Option<Vec<$ty>>) {
            self.$field = value;
        }
    };

    ($shape:ident { $($kind:ident $field:ident / $setter:ident $(: $ty:ty)?;)* }) => {
        impl $shape {
            $(
                shape_accessors!(@member $kind $field $setter $($ty)?);
            )*
        }
    };
}

/// Implement `Display` (and [Render][crate::render::Render]) for a shape.
///
/// The output lists the members that are set, in declaration order, using their wire names: `{Key: env,Value: prod}`.
/// Members marked `(sensitive)` have their value replaced with [REDACTED][crate::render::REDACTED].
macro_rules! display_shape {
    (@value $value:expr) => {
        $value.as_ref().map(crate::render::Render::render)
    };

    (@value $value:expr, sensitive) => {
        $value.as_ref().map(|_| crate::render::REDACTED.to_string())
    };

    ($shape:ident { $($field:ident: $name:literal $(($sensitive:ident))?),* $(,)? }) => {
        impl ::std::fmt::Display for $shape {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                crate::render::write_shape(f, &[$(($name, display_shape!(@value self.$field $(, $sensitive)?))),*])
            }
        }

        impl crate::render::Render for $shape {
            fn render(&self) -> String {
                self.to_string()
            }
        }
    };
}
