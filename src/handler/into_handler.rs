// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Erasure of typed functions into the uniform [`Handler`] call shape.
//!
//! [`Handler`]: super::Handler

use std::{sync::Arc, vec};

use crate::{
    convert::Value,
    outcome::{HandlerFailure, StepReturn},
    parameter::{Parameter, ParameterKind},
};

/// Uniform call shape every [`Handler`] is stored as.
///
/// [`Handler`]: super::Handler
pub type ErasedFn =
    dyn Fn(Vec<Value>) -> Result<(), HandlerFailure> + Send + Sync;

/// Function which may be turned into a [`Handler`].
///
/// Implemented for every `Fn(A1, ..., An) -> R` with `n` up to 8, where each
/// `Ai` is a [`Parameter`] and `R` is a [`StepReturn`]. `Args` is the tuple
/// of parameter types, only present to keep the implementations apart.
///
/// [`Handler`]: super::Handler
pub trait IntoHandler<Args>: Send + Sync + 'static {
    /// Returns the declared [`ParameterKind`]s in parameter order.
    fn kinds() -> Vec<ParameterKind>;

    /// Erases this function into the uniform call shape.
    fn into_erased(self) -> Arc<ErasedFn>;
}

/// Takes the next converted [`Value`] as the parameter `P`.
///
/// # Panics
///
/// If [`convert()`] hasn't produced a [`Value`] of `P::KIND` for this
/// position, which it always does.
///
/// [`convert()`]: crate::convert
fn take<P: Parameter>(values: &mut vec::IntoIter<Value>) -> P {
    let Some(value) = values.next() else {
        unreachable!("no `{}` value converted for parameter", P::KIND);
    };
    value.extract().unwrap_or_else(|v| {
        unreachable!("`{}` value converted for `{}` parameter", v.kind(), P::KIND)
    })
}

macro_rules! impl_into_handler {
    ($($arg:ident),*) => {
        impl<F, R, $($arg),*> IntoHandler<($($arg,)*)> for F
        where
            F: Fn($($arg),*) -> R + Send + Sync + 'static,
            R: StepReturn,
            $($arg: Parameter,)*
        {
            fn kinds() -> Vec<ParameterKind> {
                vec![$($arg::KIND),*]
            }

            #[allow(non_snake_case, unused_mut, unused_variables)]
            fn into_erased(self) -> Arc<ErasedFn> {
                Arc::new(move |values: Vec<Value>| {
                    let mut values = values.into_iter();
                    $(let $arg = take::<$arg>(&mut values);)*
                    self($($arg),*).into_step_result()
                })
            }
        }
    };
}

impl_into_handler!();
impl_into_handler!(A1);
impl_into_handler!(A1, A2);
impl_into_handler!(A1, A2, A3);
impl_into_handler!(A1, A2, A3, A4);
impl_into_handler!(A1, A2, A3, A4, A5);
impl_into_handler!(A1, A2, A3, A4, A5, A6);
impl_into_handler!(A1, A2, A3, A4, A5, A6, A7);
impl_into_handler!(A1, A2, A3, A4, A5, A6, A7, A8);
