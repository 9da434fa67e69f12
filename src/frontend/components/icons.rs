/// Brand mark, inlined so the navbar needs no asset request.
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" class="h-8 w-8 sm:h-6 sm:w-6" aria-hidden="true"><circle cx="12" cy="12" r="11" fill="#ff4500"/><ellipse cx="12" cy="14" rx="6" ry="4" fill="#fff"/><circle cx="9.5" cy="13.5" r="1" fill="#ff4500"/><circle cx="14.5" cy="13.5" r="1" fill="#ff4500"/><circle cx="17" cy="7" r="1.5" fill="#fff"/></svg>"##;
