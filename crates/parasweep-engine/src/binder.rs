//! Applying a resolved value to a live parameter.

use tracing::debug;

use parasweep_model::{HostError, Result, SweepError, ValueTrail};

use crate::host::ModelingHost;

/// Bind `value` to the named parameter and settle the host.
///
/// Sets the parameter's expression slot, forces a recompute and viewport
/// refresh, yields to the host's event loop, then records the expression the
/// host actually holds (it may differ from the raw value text, e.g. by
/// carrying units) into the trail.
///
/// # Errors
///
/// [`SweepError::ParameterNotFound`] when the parameter is absent; this is
/// fatal to the whole sweep because a later restore would be partial.
/// Other host failures surface as [`SweepError::Host`] naming the
/// combination reached so far.
pub fn bind_value<H: ModelingHost + ?Sized>(
    host: &mut H,
    name: &str,
    value: f64,
    trail: &mut ValueTrail,
) -> Result<()> {
    if host.parameter_expression(name).is_none() {
        return Err(SweepError::ParameterNotFound {
            name: name.to_string(),
        });
    }

    let expression = value.to_string();
    host.set_parameter_expression(name, &expression)
        .map_err(|source| host_failure(name, trail, source))?;
    host.recompute()
        .map_err(|source| host_failure(name, trail, source))?;
    host.refresh_viewport();
    host.process_events();

    // Read back rather than trusting our own text: the host owns the
    // canonical expression string.
    let bound = host
        .parameter_expression(name)
        .ok_or_else(|| SweepError::ParameterNotFound {
            name: name.to_string(),
        })?;
    debug!(parameter = name, expression = %bound, "bound value");
    trail.record(name, bound);
    Ok(())
}

fn host_failure(name: &str, trail: &ValueTrail, source: HostError) -> SweepError {
    match source {
        HostError::UnknownParameter { name } => SweepError::ParameterNotFound { name },
        source => {
            let mut combination = trail.describe();
            if !combination.is_empty() {
                combination.push_str(", ");
            }
            combination.push_str(name);
            SweepError::Host {
                combination,
                source,
            }
        }
    }
}
