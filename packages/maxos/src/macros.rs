#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: $crate::error::ErrorCode = $err;
                soroban_sdk::log!($env, "Error {} thrown at line {}", error_code as u32, line!());
                Err(error_code)
            }
        }
    };
    (
        $env:expr,
        $assert:expr,
        $err:expr,
        $($arg:tt)+
    ) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: $crate::error::ErrorCode = $err;
                soroban_sdk::log!($env, "Error {} thrown at line {}", error_code as u32, line!());
                soroban_sdk::log!($env, $($arg)*);
                Err(error_code)
            }
        }
    };
}

// Validate all bps to be between the range 0..=10_000
#[macro_export]
macro_rules! validate_bps {
    ($env:expr, $($value:expr),+) => {
        {
            let mut result: $crate::error::MaxosResult = Ok(());
            $(
                if result.is_ok() {
                    result = $crate::validate!(
                        $env,
                        $value <= $crate::constants::MAX_BPS,
                        $crate::error::ErrorCode::InvalidBps,
                        "The value {} is out of range. Must be between 0 and 10000 bps.",
                        $value
                    );
                }
            )+
            result
        }
    };
}
