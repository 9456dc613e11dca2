use super::Opts;
use crate::event::EventConfig;
use crate::ffi::{bindings as b, Attr};

// The kernel validates `size` against the layouts it knows, so the declared
// size must be exactly `size_of::<Attr>()` for the open call to succeed.
pub(crate) fn from(event_cfg: EventConfig, opts: &Opts) -> Attr {
    let mut attr = Attr {
        size: size_of::<Attr>() as _,
        ..Default::default()
    };

    // event config:

    attr.type_ = event_cfg.ty;
    attr.config = event_cfg.config;

    // count config:

    macro_rules! when {
        ($bool:ident, $flag:ident) => {
            if opts.exclude.$bool {
                attr.flags |= b::$flag;
            }
        };
    }
    when!(user, ATTR_FLAG_EXCLUDE_USER);
    when!(kernel, ATTR_FLAG_EXCLUDE_KERNEL);
    when!(hv, ATTR_FLAG_EXCLUDE_HV);
    when!(host, ATTR_FLAG_EXCLUDE_HOST);
    when!(guest, ATTR_FLAG_EXCLUDE_GUEST);
    when!(idle, ATTR_FLAG_EXCLUDE_IDLE);

    if !opts.enable {
        attr.flags |= b::ATTR_FLAG_DISABLED;
    }

    attr
}
