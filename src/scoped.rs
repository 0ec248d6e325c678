use crate::gpu::Gpu;

/// Owns one GPU handle for the length of a scope.
///
/// The handle is released when the guard drops, so every early return
/// during setup cleans up after itself. [`Scoped::into_inner`] hands the
/// handle over to a longer-lived owner instead.
pub struct Scoped<'a, G: Gpu, H: Copy> {
    gl: &'a G,
    handle: H,
    release: fn(&G, H),
    armed: bool,
}

impl<'a, G: Gpu, H: Copy> Scoped<'a, G, H> {
    pub fn new(gl: &'a G, handle: H, release: fn(&G, H)) -> Self {
        Self {
            gl,
            handle,
            release,
            armed: true,
        }
    }

    pub fn get(&self) -> H {
        self.handle
    }

    pub fn into_inner(mut self) -> H {
        self.armed = false;
        self.handle
    }
}

impl<G: Gpu, H: Copy> Drop for Scoped<'_, G, H> {
    fn drop(&mut self) {
        if self.armed {
            (self.release)(self.gl, self.handle);
        }
    }
}
