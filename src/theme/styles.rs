//! Global CSS styles for the Kulaar storefront.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --ink: #000000;
  --paper: #ffffff;
  --cream: #faf6f0;
  --muted: #6b6259;
  --line: #e8e0d5;
  --badge: #e53935;
  --accent: #c8793a;

  --font-sans: 'Manrope', 'Helvetica Neue', Arial, sans-serif;

  --radius-card: 18px;
  --radius-pill: 30px;

  --transition-fast: 150ms ease;
  --transition-reveal: 600ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans);
  background: var(--cream);
  color: var(--ink);
  line-height: 1.5;
}

/* === Toast keyframes === */
@keyframes slideUp {
  from {
    opacity: 0;
    transform: translate(-50%, 20px);
  }
  to {
    opacity: 1;
    transform: translate(-50%, 0);
  }
}

@keyframes fadeOut {
  from {
    opacity: 1;
  }
  to {
    opacity: 0;
  }
}

/* === Header === */
.site-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.25rem 2rem;
  background: var(--paper);
  border-bottom: 1px solid var(--line);
}

.brand {
  font-size: 1.5rem;
  font-weight: 800;
  letter-spacing: -0.02em;
}

.cart-open {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  padding: 0.6rem 1.2rem;
  border: none;
  border-radius: var(--radius-pill);
  background: var(--ink);
  color: var(--paper);
  font: inherit;
  cursor: pointer;
}

.cart-counter {
  background: var(--badge);
  color: white;
  border-radius: 50%;
  padding: 2px 6px;
  font-size: 11px;
  margin-left: 5px;
}

/* === Category navigation === */
.menu-categories {
  position: sticky;
  top: 0;
  z-index: 100;
  display: flex;
  gap: 0.5rem;
  padding: 0.75rem 2rem;
  overflow-x: auto;
  background: var(--cream);
  border-bottom: 1px solid var(--line);
}

.menu-categories a {
  padding: 0.4rem 1rem;
  border-radius: var(--radius-pill);
  color: var(--muted);
  text-decoration: none;
  white-space: nowrap;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.menu-categories a.active {
  background: var(--ink);
  color: var(--paper);
}

/* === Menu sections === */
.menu {
  padding: 1rem 0 4rem;
}

.menu-block {
  padding: 2rem 0;
}

.section-header {
  padding: 0 2rem 1rem;
  font-size: 1.75rem;
  font-weight: 700;
}

/* Reveal: sections start lowered and transparent */
.reveal {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.reveal.visible {
  opacity: 1;
  transform: translateY(0);
}

/* === Product rails === */
.rail-wrapper {
  position: relative;
  display: flex;
  align-items: center;
}

.horizontal-scroll {
  display: flex;
  gap: 1rem;
  padding: 0.5rem 2rem;
  overflow-x: auto;
  scrollbar-width: none;
  flex: 1;
}

.horizontal-scroll::-webkit-scrollbar {
  display: none;
}

.horizontal-scroll.draggable {
  cursor: grab;
  user-select: none;
}

.horizontal-scroll.draggable:active {
  cursor: grabbing;
}

.rail-arrow {
  flex: none;
  width: 2.5rem;
  height: 2.5rem;
  border: 1px solid var(--line);
  border-radius: 50%;
  background: var(--paper);
  font-size: 1.5rem;
  cursor: pointer;
}

.product-card {
  flex: 0 0 220px;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  padding: 1.25rem;
  border-radius: var(--radius-card);
  background: var(--paper);
  box-shadow: 0 2px 10px rgba(0, 0, 0, 0.05);
}

.product-title {
  font-size: 1.1rem;
  font-weight: 700;
}

.product-meta {
  display: flex;
  justify-content: space-between;
  color: var(--muted);
}

.product-price {
  color: var(--ink);
  font-weight: 700;
}

.add-to-cart,
.btn-primary {
  margin-top: auto;
  padding: 0.55rem 1rem;
  border: none;
  border-radius: var(--radius-pill);
  background: var(--ink);
  color: var(--paper);
  font: inherit;
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.add-to-cart:hover,
.btn-primary:hover {
  transform: translateY(-1px);
}

.btn-ghost {
  padding: 0.35rem 0.8rem;
  border: none;
  background: transparent;
  color: var(--muted);
  font: inherit;
  cursor: pointer;
}

/* === Cart modal === */
.cart-modal {
  position: fixed;
  inset: 0;
  z-index: 2000;
  display: none;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.5);
}

.cart-modal.active {
  display: flex;
}

.cart-modal-content {
  width: min(480px, 92vw);
  max-height: 80vh;
  overflow-y: auto;
  padding: 1.5rem;
  border-radius: var(--radius-card);
  background: var(--paper);
}

.cart-modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1rem;
}

.icon-btn {
  border: none;
  background: transparent;
  cursor: pointer;
}

.close-btn {
  font-size: 1.75rem;
  line-height: 1;
}

.cart-lines {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.cart-line {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.cart-line-title {
  flex: 1;
  font-weight: 600;
}

.cart-line-weight {
  color: var(--muted);
}

.cart-empty {
  color: var(--muted);
  text-align: center;
  padding: 2rem 0;
}

.modal-actions {
  display: flex;
  justify-content: flex-end;
  margin-top: 1rem;
}

/* === Toasts === */
.toast-stack {
  position: fixed;
  bottom: 20px;
  left: 50%;
  z-index: 3000;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  pointer-events: none;
}

.toast {
  transform: translateX(-50%);
  background: #000;
  color: #fff;
  padding: 12px 24px;
  border-radius: 30px;
  font-size: 14px;
  white-space: nowrap;
  box-shadow: 0 4px 15px rgba(0, 0, 0, 0.2);
  animation: slideUp 0.3s ease;
}

.toast.fading {
  animation: fadeOut 0.3s ease forwards;
}

/* === Mobile === */
@media (max-width: 768px) {
  .site-header,
  .menu-categories {
    padding-left: 1rem;
    padding-right: 1rem;
  }

  .section-header {
    padding: 0 1rem 0.75rem;
    font-size: 1.4rem;
  }

  .horizontal-scroll {
    padding: 0.5rem 1rem;
  }

  .rail-arrow {
    display: none;
  }

  .product-card {
    flex-basis: 180px;
  }
}
"#;
