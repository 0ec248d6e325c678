//! draw 2D positions, either as a plain vertex array or through an index buffer

use crate::error::DemoError;
use crate::gpu::Gpu;
use crate::scoped::Scoped;

/// attribute location of the xy position
pub const LOC_XY: u32 = 0;

struct ElementBufferObject<B> {
    ebo: B,
    elem_size: usize,
}

pub struct Drawer<G: Gpu> {
    pub mode: u32,
    num_vtx: usize,
    vertex_array: G::VertexArray,
    vbo: G::Buffer,
    elem: Option<ElementBufferObject<G::Buffer>>,
}

impl<G: Gpu> Drawer<G> {
    pub fn from_vtx2xy(gl: &G, mode: u32, vtx2xy: &[f32]) -> Result<Self, DemoError> {
        Self::upload(gl, mode, vtx2xy, None)
    }

    pub fn from_elem2vtx_vtx2xy<T>(
        gl: &G,
        mode: u32,
        elem2vtx: &[T],
        vtx2xy: &[f32],
    ) -> Result<Self, DemoError>
    where
        T: 'static + Copy + num_traits::AsPrimitive<u32>,
    {
        let elem2vtx: Vec<u32> = elem2vtx.iter().map(|i| (*i).as_()).collect();
        Self::upload(gl, mode, vtx2xy, Some(elem2vtx.as_slice()))
    }

    fn upload(
        gl: &G,
        mode: u32,
        vtx2xy: &[f32],
        elem2vtx: Option<&[u32]>,
    ) -> Result<Self, DemoError> {
        if vtx2xy.len() % 2 != 0 {
            return Err(DemoError::InvalidVertexData { len: vtx2xy.len() });
        }
        let num_vtx = vtx2xy.len() / 2;
        if let Some(&index) = elem2vtx
            .into_iter()
            .flatten()
            .find(|&&i| i as usize >= num_vtx)
        {
            return Err(DemoError::IndexOutOfRange { index, num_vtx });
        }

        let vertex_array = gl
            .create_vertex_array()
            .map_err(|reason| DemoError::CreateResource {
                what: "vertex array",
                reason,
            })?;
        let vertex_array = Scoped::new(gl, vertex_array, G::delete_vertex_array);
        let vbo = gl.create_buffer().map_err(|reason| DemoError::CreateResource {
            what: "vertex buffer",
            reason,
        })?;
        let vbo = Scoped::new(gl, vbo, G::delete_buffer);
        // created before anything is bound, so a failure never leaves a
        // deleted object bound
        let ebo = match elem2vtx {
            Some(elem2vtx) => {
                let ebo = gl.create_buffer().map_err(|reason| DemoError::CreateResource {
                    what: "index buffer",
                    reason,
                })?;
                Some((Scoped::new(gl, ebo, G::delete_buffer), elem2vtx))
            }
            None => None,
        };

        gl.bind_vertex_array(Some(vertex_array.get()));
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo.get()));
        gl.buffer_data(
            glow::ARRAY_BUFFER,
            bytemuck::cast_slice(vtx2xy),
            glow::STATIC_DRAW,
        );
        gl.vertex_attrib_pointer_f32(LOC_XY, 2, 2 * std::mem::size_of::<f32>() as i32, 0);
        gl.enable_vertex_attrib_array(LOC_XY);

        // the element binding is recorded in the bound vertex array
        let elem = ebo.map(|(ebo, elem2vtx)| {
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo.get()));
            gl.buffer_data(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(elem2vtx),
                glow::STATIC_DRAW,
            );
            (ebo, elem2vtx.len())
        });

        gl.bind_vertex_array(None);
        gl.bind_buffer(glow::ARRAY_BUFFER, None);
        if elem.is_some() {
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);
        }

        Ok(Drawer {
            mode,
            num_vtx,
            vertex_array: vertex_array.into_inner(),
            vbo: vbo.into_inner(),
            elem: elem.map(|(ebo, elem_size)| ElementBufferObject {
                ebo: ebo.into_inner(),
                elem_size,
            }),
        })
    }

    pub fn num_vtx(&self) -> usize {
        self.num_vtx
    }

    pub fn is_indexed(&self) -> bool {
        self.elem.is_some()
    }

    pub fn draw(&self, gl: &G) {
        gl.bind_vertex_array(Some(self.vertex_array));
        match &self.elem {
            Some(elem) => {
                gl.draw_elements(self.mode, elem.elem_size as i32, glow::UNSIGNED_INT, 0)
            }
            None => gl.draw_arrays(self.mode, 0, self.num_vtx as i32),
        }
    }

    pub fn destroy(self, gl: &G) {
        gl.delete_vertex_array(self.vertex_array);
        gl.delete_buffer(self.vbo);
        if let Some(elem) = self.elem {
            gl.delete_buffer(elem.ebo);
        }
    }
}
