//! 3-D simplex gradient noise with a period-289 lattice hash.
//!
//! Pure function of its input: no tables, no state, no allocation. The hash
//! wraps at 289 (17²) to keep every intermediate value in range for f32
//! arithmetic, which is what makes the CPU and WGSL evaluations agree.

use glam::{Vec3, Vec3Swizzles, Vec4, Vec4Swizzles};

/// Lattice wrapping period of the gradient hash.
pub const LATTICE_PERIOD: f32 = 289.0;

fn mod289_vec3(x: Vec3) -> Vec3 {
    x - (x * (1.0 / LATTICE_PERIOD)).floor() * LATTICE_PERIOD
}

fn mod289_vec4(x: Vec4) -> Vec4 {
    x - (x * (1.0 / LATTICE_PERIOD)).floor() * LATTICE_PERIOD
}

/// Gradient permutation polynomial, `(34x + 1)x mod 289`.
fn permute(x: Vec4) -> Vec4 {
    mod289_vec4(((x * 34.0) + 1.0) * x)
}

/// First-order Taylor expansion of `1/sqrt(r)` around 0.7.
fn taylor_inv_sqrt(r: Vec4) -> Vec4 {
    Vec4::splat(1.792_842_9) - 0.853_734_7 * r
}

/// Component-wise GLSL `step`: 0.0 where `x < edge`, 1.0 otherwise.
fn step3(edge: Vec3, x: Vec3) -> Vec3 {
    Vec3::new(
        if x.x < edge.x { 0.0 } else { 1.0 },
        if x.y < edge.y { 0.0 } else { 1.0 },
        if x.z < edge.z { 0.0 } else { 1.0 },
    )
}

fn step4(edge: Vec4, x: Vec4) -> Vec4 {
    Vec4::new(
        if x.x < edge.x { 0.0 } else { 1.0 },
        if x.y < edge.y { 0.0 } else { 1.0 },
        if x.z < edge.z { 0.0 } else { 1.0 },
        if x.w < edge.w { 0.0 } else { 1.0 },
    )
}

/// Evaluate 3-D simplex noise at `v`. Returns a value in approximately
/// `[-1, 1]`, smooth (C1) everywhere.
pub fn snoise(v: Vec3) -> f32 {
    const C_X: f32 = 1.0 / 6.0;
    const C_Y: f32 = 1.0 / 3.0;
    let d = Vec4::new(0.0, 0.5, 1.0, 2.0);

    // Skew into simplex cell space and find the base corner.
    let mut i = (v + Vec3::splat(v.dot(Vec3::splat(C_Y)))).floor();
    let x0 = v - i + Vec3::splat(i.dot(Vec3::splat(C_X)));

    // Rank the offsets to pick the simplex traversal order.
    let g = step3(x0.yzx(), x0);
    let l = Vec3::ONE - g;
    let i1 = g.min(l.zxy());
    let i2 = g.max(l.zxy());

    let x1 = x0 - i1 + Vec3::splat(C_X);
    let x2 = x0 - i2 + Vec3::splat(C_Y);
    let x3 = x0 - Vec3::splat(d.y);

    // Hash the four corners, wrapping at the lattice period.
    i = mod289_vec3(i);
    let p = permute(
        permute(
            permute(Vec4::splat(i.z) + Vec4::new(0.0, i1.z, i2.z, 1.0))
                + Vec4::splat(i.y)
                + Vec4::new(0.0, i1.y, i2.y, 1.0),
        ) + Vec4::splat(i.x)
            + Vec4::new(0.0, i1.x, i2.x, 1.0),
    );

    // Map hashes onto a 7x7 grid of gradient directions.
    let n = 1.0 / 7.0;
    let ns = n * d.wyz() - d.xzx();
    let j = p - 49.0 * (p * ns.z * ns.z).floor();

    let x_ = (j * ns.z).floor();
    let y_ = (j - 7.0 * x_).floor();

    let x = x_ * ns.x + Vec4::splat(ns.y);
    let y = y_ * ns.x + Vec4::splat(ns.y);
    let h = Vec4::ONE - x.abs() - y.abs();

    let b0 = Vec4::new(x.x, x.y, y.x, y.y);
    let b1 = Vec4::new(x.z, x.w, y.z, y.w);

    let s0 = b0.floor() * 2.0 + 1.0;
    let s1 = b1.floor() * 2.0 + 1.0;
    let sh = -step4(h, Vec4::ZERO);

    let a0 = b0.xzyw() + s0.xzyw() * sh.xxyy();
    let a1 = b1.xzyw() + s1.xzyw() * sh.zzww();

    let mut p0 = Vec3::new(a0.x, a0.y, h.x);
    let mut p1 = Vec3::new(a0.z, a0.w, h.y);
    let mut p2 = Vec3::new(a1.x, a1.y, h.z);
    let mut p3 = Vec3::new(a1.z, a1.w, h.w);

    // Normalize gradients.
    let norm = taylor_inv_sqrt(Vec4::new(
        p0.dot(p0),
        p1.dot(p1),
        p2.dot(p2),
        p3.dot(p3),
    ));
    p0 *= norm.x;
    p1 *= norm.y;
    p2 *= norm.z;
    p3 *= norm.w;

    // Radial falloff per corner, then blend the gradient contributions.
    let mut m = (Vec4::splat(0.6)
        - Vec4::new(x0.dot(x0), x1.dot(x1), x2.dot(x2), x3.dot(x3)))
    .max(Vec4::ZERO);
    m *= m;

    42.0 * (m * m).dot(Vec4::new(p0.dot(x0), p1.dot(x1), p2.dot(x2), p3.dot(x3)))
}
