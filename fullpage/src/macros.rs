// Log through `tracing` under the "fullpage" target; every call compiles away without the
// `tracing` feature.

#[cfg(feature = "tracing")]
macro_rules! flog {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "fullpage", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! flog {
    ($level:ident, $($tt:tt)*) => {};
}

macro_rules! ftrace {
    ($($tt:tt)*) => { flog!(trace, $($tt)*) };
}

macro_rules! fdebug {
    ($($tt:tt)*) => { flog!(debug, $($tt)*) };
}

macro_rules! fwarn {
    ($($tt:tt)*) => { flog!(warn, $($tt)*) };
}
